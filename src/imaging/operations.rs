//! High-level image operations.
//!
//! These functions combine calculations with backend execution. Planning is
//! pure: given source dimensions and the post identifier it yields the exact
//! resize and crop window. Execution hands the plan to a backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{Orientation, centered_offset, fill_dimensions, pixel_offset};
use super::overrides::adjustment_for;
use super::params::{CropWindow, ThumbnailParams};
use crate::naming::small_output_path;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Edge length of every generated thumbnail.
pub const TARGET_SIZE: u32 = 400;

/// Plan a thumbnail operation without executing it.
///
/// The short edge is scaled to [`TARGET_SIZE`], the window is centered on the
/// long edge and then shifted by the identifier's override, if any.
pub fn plan_thumbnail(
    source: &Path,
    identifier: &str,
    dims: Dimensions,
) -> Result<ThumbnailParams> {
    if dims.width == 0 || dims.height == 0 {
        return Err(BackendError::ZeroDimension(source.to_path_buf()));
    }

    let orientation = Orientation::of(dims.width, dims.height);
    let (resize_width, resize_height) = fill_dimensions((dims.width, dims.height), TARGET_SIZE);
    let adjustment = adjustment_for(identifier, orientation);

    let crop = match orientation {
        Orientation::Portrait => {
            let raw = centered_offset(resize_height, TARGET_SIZE, adjustment);
            CropWindow {
                x: 0,
                y: pixel_offset(raw, resize_height, TARGET_SIZE),
                size: TARGET_SIZE,
            }
        }
        Orientation::Landscape => {
            let raw = centered_offset(resize_width, TARGET_SIZE, adjustment);
            CropWindow {
                x: pixel_offset(raw, resize_width, TARGET_SIZE),
                y: 0,
                size: TARGET_SIZE,
            }
        }
    };

    Ok(ThumbnailParams {
        source: source.to_path_buf(),
        output: small_output_path(source),
        resize_width,
        resize_height,
        crop,
    })
}

/// Create the `_small` thumbnail for one source image.
///
/// Returns the executed plan.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    identifier: &str,
) -> Result<ThumbnailParams> {
    let dims = backend.identify(source)?;
    let params = plan_thumbnail(source, identifier, dims)?;
    backend.thumbnail(&params)?;
    Ok(params)
}
