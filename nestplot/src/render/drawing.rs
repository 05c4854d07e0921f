use anyhow::Result;

use crate::geometry::primitives::Point;
use crate::render::{Color, DrawingSink, ShapeStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Polygon {
        vertices: Vec<Point>,
        style: ShapeStyle,
    },
    Polyline {
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
}

/// Every drawing instruction of a single page, in page coordinates.
/// Computing these is independent per bin; only replaying them touches the sink.
#[derive(Clone, Debug, PartialEq)]
pub struct PageDrawing {
    /// Number of the bin drawn on this page
    pub number: usize,
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
    /// Pieces drawn on the page
    pub n_pieces: usize,
    /// Placement records without a piece definition
    pub n_skipped: usize,
    /// Pieces for which no interior anchor could be found
    pub n_unanchored: usize,
}

impl PageDrawing {
    pub fn replay<S: DrawingSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        sink.begin_page(self.number, self.width, self.height)?;
        for op in &self.ops {
            match op {
                DrawOp::Polygon { vertices, style } => sink.draw_polygon(vertices, style)?,
                DrawOp::Polyline {
                    points,
                    color,
                    width,
                } => sink.draw_polyline(points, *color, *width)?,
            }
        }
        sink.end_page()
    }

    pub fn n_polylines(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Polyline { .. }))
            .count()
    }
}
