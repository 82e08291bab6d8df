//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`operations`](super::operations), which does the
//! geometry, and the [`backend`](super::backend), which does the pixel work.
//! Keeping the plan as plain data lets the batch loop be tested against a
//! mock backend.

use std::path::PathBuf;

/// Square region cut out of the resized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl CropWindow {
    /// Bottom-right corner (exclusive), as `(x, y)`.
    pub fn end(&self) -> (u32, u32) {
        (self.x + self.size, self.y + self.size)
    }
}

/// Everything needed to produce one thumbnail: resize to `resize_width` x
/// `resize_height`, then cut `crop` out of the result.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub resize_width: u32,
    pub resize_height: u32,
    pub crop: CropWindow,
}
