//! Per-post crop adjustments.
//!
//! A centered crop cuts the bowl out of a few photos. Those posts get a
//! hand-tuned shift of the crop window, keyed by the post directory name
//! (the identifier) and expressed as a signed fraction of the target size.
//!
//! | Identifier | Applies to | Shift |
//! |---|---|---|
//! | `shoyu_zurich` | portrait | +0.11 (down) |
//! | `tantanmen` | landscape | −0.17 (left) |
//! | `tonkotsu` | landscape | −0.25 (left) |
//!
//! An entry only fires on an exact identifier match and only when the source
//! has the orientation it was tuned for.

use super::calculations::Orientation;

/// One hand-tuned crop shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetOverride {
    pub identifier: &'static str,
    pub orientation: Orientation,
    /// Signed fraction of the target size added to the crop offset.
    pub fraction: f64,
}

pub const OFFSET_OVERRIDES: &[OffsetOverride] = &[
    OffsetOverride {
        identifier: "shoyu_zurich",
        orientation: Orientation::Portrait,
        fraction: 0.11,
    },
    OffsetOverride {
        identifier: "tantanmen",
        orientation: Orientation::Landscape,
        fraction: -0.17,
    },
    OffsetOverride {
        identifier: "tonkotsu",
        orientation: Orientation::Landscape,
        fraction: -0.25,
    },
];

/// Look up the crop shift for `identifier` in the given orientation.
///
/// Returns `0.0` when there is no matching entry.
pub fn adjustment_for(identifier: &str, orientation: Orientation) -> f64 {
    OFFSET_OVERRIDES
        .iter()
        .find(|o| o.identifier == identifier && o.orientation == orientation)
        .map_or(0.0, |o| o.fraction)
}
