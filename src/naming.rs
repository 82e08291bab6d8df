//! Filename conventions for thumbnail sources and their derivatives.
//!
//! Every post directory holds one source image named `thumbnail.<ext>`. The
//! square derivative is written next to it as `thumbnail_small.<ext>`:
//! - `content/ramen/miso/thumbnail.jpg` → `content/ramen/miso/thumbnail_small.jpg`
//! - `content/ramen/tonkotsu/thumbnail.png` → identifier `tonkotsu`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File stem every source image must have.
pub const THUMBNAIL_STEM: &str = "thumbnail";

/// Inserted between the stem and the extension of the derivative.
pub const OUTPUT_SUFFIX: &str = "_small";

/// True for `thumbnail.<rest>` with a non-empty `<rest>`, the glob
/// `thumbnail.*`. `thumbnail.v2.png` matches with stem `thumbnail.v2`.
///
/// Derivatives (`thumbnail_small.<ext>`, `thumbnail.v2_small.png`) never
/// match, so re-runs do not feed their own output back in.
pub fn is_thumbnail_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let rest = match name
        .strip_prefix(THUMBNAIL_STEM)
        .and_then(|r| r.strip_prefix('.'))
    {
        Some(rest) if !rest.is_empty() => rest,
        _ => return false,
    };
    let is_derivative = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| rest.contains('.') && s.ends_with(OUTPUT_SUFFIX));
    !is_derivative
}

/// Name of the directory directly containing `path`.
///
/// Empty when the path has no parent component.
pub fn post_identifier(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `<dir>/<stem><OUTPUT_SUFFIX>.<ext>` for a source at `<dir>/<stem>.<ext>`.
pub fn small_output_path(source: &Path) -> PathBuf {
    let mut name = OsString::from(source.file_stem().unwrap_or_default());
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    source.with_file_name(name)
}
