//! # Ramen Thumbs
//!
//! Square thumbnails for the ramen review posts. Every post directory under
//! `content/ramen/` carries a `thumbnail.<ext>`; this crate writes a 400×400
//! `thumbnail_small.<ext>` next to each one.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      content/ramen/**/thumbnail.*   (walk, match, derive identifier)
//! 2. Plan      dimensions + identifier        (resize, centered window, override)
//! 3. Execute   decode → resize → crop → save  (one file at a time)
//! ```
//!
//! The short edge is scaled to 400 with a bicubic filter, the long edge keeps
//! the aspect ratio, and a 400×400 window is cut from the middle of the long
//! edge. A handful of posts shift that window by a fixed fraction, see
//! [`imaging::overrides`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content root and collects thumbnail sources |
//! | [`naming`] | Source matching, identifier, `_small` output path |
//! | [`imaging`] | Geometry, override table, `image`-crate backend |
//! | [`process`] | The sequential batch, with optional progress events |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Pinned Crop Rounding
//!
//! Crop offsets are computed in floating point and snapped with
//! round-half-to-even, then clamped so the window never leaves the resized
//! image. Output is identical across platforms and always exactly 400×400.
//!
//! ## Fail Fast
//!
//! A source that cannot be decoded or a thumbnail that cannot be written ends
//! the batch with an error. There is no skip-and-continue.

pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
