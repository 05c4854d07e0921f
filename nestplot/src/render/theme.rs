use serde::{Deserialize, Serialize};

use crate::label::SegmentRole;
use crate::render::{Color, ShapeStyle};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderTheme {
    pub bin_stroke: Color,
    pub bin_stroke_width: f64,
    /// Cycled through by placement index, a single entry gives every piece the same fill
    pub piece_fills: Vec<Color>,
    pub fill_opacity: f64,
    pub piece_stroke: Color,
    pub piece_stroke_width: f64,
    pub label_stroke_width: f64,
    pub primary_label: Color,
    pub annotation_label: Color,
    pub suffix_label: Color,
}

impl Default for RenderTheme {
    fn default() -> Self {
        RenderTheme::plain()
    }
}

impl RenderTheme {
    pub fn plain() -> Self {
        RenderTheme {
            bin_stroke: Color::BLACK,
            bin_stroke_width: 1.0,
            piece_fills: vec![Color(0xE6, 0xE6, 0xE6)],
            fill_opacity: 0.7,
            piece_stroke: Color::BLUE,
            piece_stroke_width: 0.5,
            label_stroke_width: 1.0,
            primary_label: Color::RED,
            annotation_label: Color::BLACK,
            suffix_label: Color::GREEN,
        }
    }

    /// Light fills which distinguish neighbouring pieces
    pub fn pastel() -> Self {
        RenderTheme {
            piece_fills: vec![
                Color(0xFF, 0xB3, 0xBA),
                Color(0xFF, 0xDF, 0xBA),
                Color(0xFF, 0xFF, 0xBA),
                Color(0xBA, 0xFF, 0xC9),
                Color(0xBA, 0xE1, 0xFF),
                Color(0xD7, 0xBA, 0xFF),
            ],
            ..RenderTheme::plain()
        }
    }

    pub fn piece_style(&self, index: usize) -> ShapeStyle {
        let fill = match self.piece_fills.len() {
            0 => None,
            n => Some(self.piece_fills[index % n]),
        };
        ShapeStyle {
            fill,
            fill_opacity: self.fill_opacity,
            stroke: self.piece_stroke,
            stroke_width: self.piece_stroke_width,
        }
    }

    pub fn bin_style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: None,
            fill_opacity: 0.0,
            stroke: self.bin_stroke,
            stroke_width: self.bin_stroke_width,
        }
    }

    pub fn label_color(&self, role: SegmentRole) -> Color {
        match role {
            SegmentRole::Primary => self.primary_label,
            SegmentRole::Annotation => self.annotation_label,
            SegmentRole::Suffix => self.suffix_label,
        }
    }
}
