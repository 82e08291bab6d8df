//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `ImageReader::decode` |
//! | Resize | `DynamicImage::resize_exact` with `CatmullRom` (bicubic) |
//! | Crop | `DynamicImage::crop_imm` |
//! | Encode | format inferred from the output extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ThumbnailParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Bicubic resampling. The only filter used for thumbnails.
const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open `path` with the format sniffed from its leading bytes.
///
/// The extension is only a fallback, so a PNG saved as `thumbnail.jpg` still
/// decodes.
fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save a DynamicImage to the given path, keeping the encoding implied by the
/// extension.
fn save_image(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let format = ImageFormat::from_path(path).map_err(|e| {
        BackendError::ProcessingFailed(format!(
            "Unsupported output format {}: {}",
            path.display(),
            e
        ))
    })?;

    // JPEG has no alpha channel
    let flattened;
    let img = if format == ImageFormat::Jpeg && img.color().has_alpha() {
        flattened = DynamicImage::ImageRgb8(img.to_rgb8());
        &flattened
    } else {
        img
    };

    img.save_with_format(path, format).map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to write {}: {}", path.display(), e))
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?.into_dimensions().map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        if width == 0 || height == 0 {
            return Err(BackendError::ZeroDimension(path.to_path_buf()));
        }
        Ok(Dimensions { width, height })
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;

        let resized = img.resize_exact(params.resize_width, params.resize_height, RESIZE_FILTER);
        let crop = params.crop;
        let cropped = resized.crop_imm(crop.x, crop.y, crop.size, crop.size);

        if cropped.width() != crop.size || cropped.height() != crop.size {
            return Err(BackendError::ProcessingFailed(format!(
                "Crop window ({}, {}) size {} does not fit {}x{} image",
                crop.x,
                crop.y,
                crop.size,
                resized.width(),
                resized.height()
            )));
        }

        save_image(&cropped, &params.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::CropWindow;
    use crate::test_helpers::{create_test_jpeg, create_test_png};
    use image::GenericImageView;

    #[test]
    fn identify_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("thumbnail.jpg");
        create_test_jpeg(&path, 200, 150);

        let backend = RustBackend::new();
        let dims = backend.identify(&path).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_nonexistent_file_errors() {
        let backend = RustBackend::new();
        let result = backend.identify(Path::new("/nonexistent/thumbnail.jpg"));
        assert!(result.is_err());
    }

    #[test]
    fn identify_garbage_file_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("thumbnail.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        let backend = RustBackend::new();
        assert!(backend.identify(&path).is_err());
    }

    #[test]
    fn identify_sniffs_content_over_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("thumbnail.jpg");
        let png = tmp.path().join("real.png");
        create_test_png(&png, 600, 400);
        std::fs::rename(&png, &path).unwrap();

        let backend = RustBackend::new();
        let dims = backend.identify(&path).unwrap();
        assert_eq!((dims.width, dims.height), (600, 400));
    }

    #[test]
    fn thumbnail_from_misnamed_source() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("thumbnail.jpg");
        let png = tmp.path().join("real.png");
        create_test_png(&png, 600, 400);
        std::fs::rename(&png, &source).unwrap();

        let output = tmp.path().join("thumbnail_small.jpg");
        let backend = RustBackend::new();
        backend
            .thumbnail(&ThumbnailParams {
                source,
                output: output.clone(),
                resize_width: 600,
                resize_height: 400,
                crop: CropWindow {
                    x: 100,
                    y: 0,
                    size: 400,
                },
            })
            .unwrap();

        // Output keeps the encoding its extension names
        assert_eq!(
            image::ImageReader::open(&output)
                .unwrap()
                .with_guessed_format()
                .unwrap()
                .format(),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(image::image_dimensions(&output).unwrap(), (400, 400));
    }

    #[test]
    fn thumbnail_crops_exact_window() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("thumbnail.png");
        create_test_png(&source, 800, 400);

        let output = tmp.path().join("thumbnail_small.png");
        let backend = RustBackend::new();
        backend
            .thumbnail(&ThumbnailParams {
                source,
                output: output.clone(),
                resize_width: 800,
                resize_height: 400,
                crop: CropWindow {
                    x: 100,
                    y: 0,
                    size: 400,
                },
            })
            .unwrap();

        let out = image::open(&output).unwrap();
        assert_eq!(out.dimensions(), (400, 400));
        // Source red channel encodes x; no resampling happened at 1:1 scale
        assert_eq!(out.get_pixel(0, 0).0[0], 100);
        assert_eq!(out.get_pixel(10, 0).0[0], 110);
    }

    #[test]
    fn thumbnail_jpeg_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("thumbnail.jpg");
        create_test_jpeg(&source, 600, 900);

        let output = tmp.path().join("thumbnail_small.jpg");
        let backend = RustBackend::new();
        backend
            .thumbnail(&ThumbnailParams {
                source,
                output: output.clone(),
                resize_width: 400,
                resize_height: 600,
                crop: CropWindow {
                    x: 0,
                    y: 100,
                    size: 400,
                },
            })
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (400, 400));
    }

    #[test]
    fn thumbnail_drops_alpha_for_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("thumbnail.png");
        let rgba = image::RgbaImage::from_pixel(400, 400, image::Rgba([10, 20, 30, 128]));
        rgba.save(&source).unwrap();

        let output = tmp.path().join("out.jpg");
        let backend = RustBackend::new();
        backend
            .thumbnail(&ThumbnailParams {
                source,
                output: output.clone(),
                resize_width: 400,
                resize_height: 400,
                crop: CropWindow {
                    x: 0,
                    y: 0,
                    size: 400,
                },
            })
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (400, 400));
    }

    #[test]
    fn thumbnail_rejects_window_outside_image() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("thumbnail.png");
        create_test_png(&source, 500, 400);

        let backend = RustBackend::new();
        let result = backend.thumbnail(&ThumbnailParams {
            source,
            output: tmp.path().join("thumbnail_small.png"),
            resize_width: 500,
            resize_height: 400,
            crop: CropWindow {
                x: 200,
                y: 0,
                size: 400,
            },
        });
        assert!(result.is_err());
    }

    #[test]
    fn thumbnail_unknown_output_extension_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("thumbnail.png");
        create_test_png(&source, 400, 400);

        let backend = RustBackend::new();
        let result = backend.thumbnail(&ThumbnailParams {
            source,
            output: tmp.path().join("thumbnail_small.xyz"),
            resize_width: 400,
            resize_height: 400,
            crop: CropWindow {
                x: 0,
                y: 0,
                size: 400,
            },
        });
        assert!(result.is_err());
    }
}
