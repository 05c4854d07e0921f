use itertools::Itertools;

use crate::geometry::primitives::Point;
use crate::interior::Anchor;
use crate::label::{
    ANNOTATION_RAISE, BASELINE_DROP, LabelShape, SECONDARY_SCALE_RATIO, SIZE_TO_SCALE_DIVISOR,
};
use crate::render::{GlyphProvider, GlyphRun};

/// Which part of a label a segment represents, determines its color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    Primary,
    /// Secondary part of an [`LabelShape::Annotated`] label
    Annotation,
    /// Secondary part of a [`LabelShape::Split`] label
    Suffix,
}

/// A run of text at a single scale, positioned in final coordinates
#[derive(Clone, Debug)]
pub struct LabelSegment {
    pub text: String,
    pub role: SegmentRole,
    pub scale: f64,
    /// Start of the segment's baseline
    pub origin: Point,
    pub run: GlyphRun,
}

impl LabelSegment {
    pub fn advance(&self) -> f64 {
        self.run.advance
    }

    /// Stroke polylines of the segment, moved to their final position
    pub fn strokes(&self) -> impl Iterator<Item = Vec<Point>> + '_ {
        let offset = self.origin.into();
        self.run
            .strokes
            .iter()
            .map(move |stroke| stroke.iter().map(|p| p.translate(offset)).collect())
    }
}

#[derive(Clone, Debug)]
pub struct LabelLayout {
    pub shape: LabelShape,
    /// Segments from left to right
    pub segments: Vec<LabelSegment>,
}

impl LabelLayout {
    pub fn total_width(&self) -> f64 {
        self.segments.iter().map(LabelSegment::advance).sum()
    }
}

/// Lays out `raw` around `anchor`.
///
/// The primary scale is `anchor.size / 80`, secondary segments use half of that.
/// Segments follow each other left to right without extra spacing, the combined block is
/// horizontally centered on the anchor with its baseline `10 × scale` below it.
/// Annotations are raised by `0.2 × 50 × scale` relative to that baseline.
pub fn layout_label(raw: &str, anchor: &Anchor, glyphs: &impl GlyphProvider) -> LabelLayout {
    let scale = anchor.size / SIZE_TO_SCALE_DIVISOR;
    let secondary_scale = scale * SECONDARY_SCALE_RATIO;
    let shape = LabelShape::classify(raw);

    //(text, role, scale, raise)
    let parts = match &shape {
        LabelShape::Simple(text) => vec![(text, SegmentRole::Primary, scale, 0.0)],
        LabelShape::Annotated { primary, secondary } => vec![
            (primary, SegmentRole::Primary, scale, 0.0),
            (
                secondary,
                SegmentRole::Annotation,
                secondary_scale,
                ANNOTATION_RAISE * scale,
            ),
        ],
        LabelShape::Split { primary, secondary } => vec![
            (primary, SegmentRole::Primary, scale, 0.0),
            (secondary, SegmentRole::Suffix, secondary_scale, 0.0),
        ],
    };

    let runs = parts
        .iter()
        .map(|(text, _, scale, _)| glyphs.shape_text(text, *scale))
        .collect_vec();
    let total_width: f64 = runs.iter().map(|r| r.advance).sum();

    let Point(anchor_x, anchor_y) = anchor.point;
    let baseline = anchor_y - BASELINE_DROP * scale;
    let mut x = anchor_x - total_width / 2.0;

    let segments = parts
        .into_iter()
        .zip(runs)
        .map(|((text, role, scale, raise), run)| {
            let origin = Point(x, baseline + raise);
            x += run.advance;
            LabelSegment {
                text: text.clone(),
                role,
                scale,
                origin,
                run,
            }
        })
        .collect();

    LabelLayout { shape, segments }
}
