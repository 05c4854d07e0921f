mod color;
mod drawing;
mod page;
mod renderer;
mod theme;

#[doc(inline)]
pub use color::Color;
#[doc(inline)]
pub use drawing::{DrawOp, PageDrawing};
#[doc(inline)]
pub use page::{PageFrame, PageOrientation};
#[doc(inline)]
pub use renderer::{LayoutRenderer, RenderStats};
#[doc(inline)]
pub use theme::RenderTheme;

use anyhow::Result;

use crate::geometry::primitives::Point;

/// Text shaped by a [`GlyphProvider`], in local coordinates:
/// the run starts at the origin and its baseline lies on the x-axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphRun {
    /// Horizontal distance to the start of the next run
    pub advance: f64,
    /// Polylines to be stroked, in pen order
    pub strokes: Vec<Vec<Point>>,
}

/// Converts text into stroke polylines
pub trait GlyphProvider: Sync {
    fn shape_text(&self, text: &str, scale: f64) -> GlyphRun;
}

/// Fill and stroke of a closed polygon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    /// `None` leaves the interior transparent
    pub fill: Option<Color>,
    pub fill_opacity: f64,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// Receives the drawing instructions of every page.
///
/// Calls are strictly serialized: `begin_page`, any number of draw calls, `end_page`,
/// repeated for every page in bin order, and `finalize` once at the very end.
pub trait DrawingSink {
    fn begin_page(&mut self, number: usize, width: f64, height: f64) -> Result<()>;

    /// Fills and strokes a closed polygon, closing vertex implicit
    fn draw_polygon(&mut self, vertices: &[Point], style: &ShapeStyle) -> Result<()>;

    /// Strokes an open polyline
    fn draw_polyline(&mut self, points: &[Point], color: Color, width: f64) -> Result<()>;

    fn end_page(&mut self) -> Result<()>;

    fn finalize(&mut self) -> Result<()>;
}
