//! Pure calculation functions for thumbnail geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Which side of the source is the short edge.
///
/// Square sources are treated as landscape: height becomes the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Width < height. The crop window slides vertically.
    Portrait,
    /// Width >= height. The crop window slides horizontally.
    Landscape,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if width < height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Calculate the resize dimensions that bring the short edge to `target`.
///
/// The long edge keeps the source aspect ratio and is rounded to the nearest
/// pixel. Callers must reject zero-sized sources first.
///
/// # Examples
/// ```
/// # use ramen_thumbs::imaging::calculations::fill_dimensions;
/// // 800x1600 portrait → 400x800
/// assert_eq!(fill_dimensions((800, 1600), 400), (400, 800));
///
/// // 1200x800 landscape → 600x400
/// assert_eq!(fill_dimensions((1200, 800), 400), (600, 400));
/// ```
pub fn fill_dimensions(source: (u32, u32), target: u32) -> (u32, u32) {
    let (src_w, src_h) = source;

    match Orientation::of(src_w, src_h) {
        Orientation::Portrait => {
            let h = (target as f64 * (src_h as f64 / src_w as f64)).round() as u32;
            (target, h.max(target))
        }
        Orientation::Landscape => {
            let w = (target as f64 * (src_w as f64 / src_h as f64)).round() as u32;
            (w.max(target), target)
        }
    }
}

/// Raw crop offset along the sliding axis, before rounding.
///
/// Centers the window in `extent` and then shifts it by `adjustment`
/// (a signed fraction of `target`).
pub fn centered_offset(extent: u32, target: u32, adjustment: f64) -> f64 {
    (extent as f64 - target as f64) / 2.0 + target as f64 * adjustment
}

/// Pin a fractional offset to a pixel position inside `[0, extent - target]`.
///
/// Ties round to even, matching how fractional crop boxes are snapped by
/// common imaging libraries, so `x.5` offsets are stable across platforms.
pub fn pixel_offset(raw: f64, extent: u32, target: u32) -> u32 {
    let max = extent.saturating_sub(target) as f64;
    raw.round_ties_even().clamp(0.0, max) as u32
}
