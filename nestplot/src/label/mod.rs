mod layout;
mod shape;

#[doc(inline)]
pub use layout::{LabelLayout, LabelSegment, SegmentRole, layout_label};
#[doc(inline)]
pub use shape::LabelShape;

/// The primary font scale is the anchor size divided by this
pub const SIZE_TO_SCALE_DIVISOR: f64 = 80.0;
/// Scale of the secondary segment relative to the primary one
pub const SECONDARY_SCALE_RATIO: f64 = 0.5;
/// The baseline sits this many primary scale units below the anchor
pub const BASELINE_DROP: f64 = 10.0;
/// Raise of an annotation above the primary baseline, in primary scale units (0.2 × 50)
pub const ANNOTATION_RAISE: f64 = 0.2 * 50.0;
