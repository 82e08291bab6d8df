//! Image processing, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | `resize_exact` + CatmullRom (bicubic) |
//! | **Crop** | `crop_imm` at the planned window |
//! | **Save** | format from the output extension |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension and offset math (unit testable)
//! - **Overrides**: The per-post crop shift table
//! - **Parameters**: Data structures describing one thumbnail
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Planning and execution combining the above

pub mod backend;
pub mod calculations;
pub mod operations;
pub mod overrides;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{TARGET_SIZE, create_thumbnail, plan_thumbnail};
pub use params::{CropWindow, ThumbnailParams};
pub use rust_backend::RustBackend;
