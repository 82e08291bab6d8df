//! Shared test utilities.
//!
//! Builds throwaway content trees of synthetic images so tests exercise real
//! decode and encode paths without checked-in fixtures.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! add_post(tmp.path(), "miso", "jpg", 1200, 800);
//! ```

use image::{ImageEncoder, RgbImage};
use std::path::{Path, PathBuf};

pub use tempfile::TempDir;

/// Gradient image: red encodes x, green encodes y.
fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a lossless PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient(width, height).save(path).unwrap();
}

/// Create `<root>/<post>/thumbnail.<ext>` and return its path.
pub fn add_post(root: &Path, post: &str, ext: &str, width: u32, height: u32) -> PathBuf {
    let dir = root.join(post);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("thumbnail.{ext}"));
    match ext {
        "jpg" | "jpeg" => create_test_jpeg(&path, width, height),
        _ => create_test_png(&path, width, height),
    }
    path
}
