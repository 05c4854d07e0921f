mod romans;

use std::collections::HashMap;

use anyhow::{Result, ensure};
use itertools::Itertools;
use nestplot::geometry::primitives::Point;
use nestplot::render::{GlyphProvider, GlyphRun};

/// Hershey coordinate of the baseline
const BASELINE: i32 = 9;
/// Encoded ` R`
const PEN_UP: (i32, i32) = (' ' as i32 - 'R' as i32, 0);

/// A single glyph in font units, y pointing up and the baseline at zero
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub advance: i32,
    pub strokes: Vec<Vec<(i32, i32)>>,
}

impl Glyph {
    /// Decodes a glyph from Hershey encoding
    pub fn decode(encoded: &str) -> Result<Self> {
        let coords = encoded.chars().map(|c| c as i32 - 'R' as i32).collect_vec();
        ensure!(
            coords.len() >= 2 && coords.len() % 2 == 0,
            "malformed glyph: {encoded:?}"
        );
        let (left, right) = (coords[0], coords[1]);

        let mut strokes: Vec<Vec<(i32, i32)>> = vec![];
        let mut current = vec![];
        for (&x, &y) in coords[2..].iter().tuples() {
            if (x, y) == PEN_UP {
                if current.len() > 1 {
                    strokes.push(std::mem::take(&mut current));
                }
                current.clear();
            } else {
                current.push((x - left, BASELINE - y));
            }
        }
        if current.len() > 1 {
            strokes.push(current);
        }

        Ok(Glyph {
            advance: right - left,
            strokes,
        })
    }
}

/// Stroke font which shapes text into polylines
#[derive(Clone, Debug)]
pub struct StrokeFont {
    glyphs: HashMap<char, Glyph>,
    /// Advance of characters without a glyph
    fallback_advance: i32,
}

impl StrokeFont {
    /// The built-in Roman simplex font
    pub fn romans() -> Result<Self> {
        let glyphs = romans::GLYPHS
            .iter()
            .map(|&(c, encoded)| Ok((c, Glyph::decode(encoded)?)))
            .collect::<Result<HashMap<_, _>>>()?;
        let fallback_advance = glyphs.get(&' ').map_or(16, |g| g.advance);
        Ok(Self {
            glyphs,
            fallback_advance,
        })
    }

    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    /// Width of `text` at scale 1
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars()
            .map(|c| self.glyph(c).map_or(self.fallback_advance, |g| g.advance))
            .sum()
    }
}

impl GlyphProvider for StrokeFont {
    fn shape_text(&self, text: &str, scale: f64) -> GlyphRun {
        let mut cursor = 0;
        let mut strokes = vec![];
        for c in text.chars() {
            match self.glyph(c) {
                Some(glyph) => {
                    strokes.extend(glyph.strokes.iter().map(|stroke| {
                        stroke
                            .iter()
                            .map(|&(x, y)| Point((x + cursor) as f64 * scale, y as f64 * scale))
                            .collect_vec()
                    }));
                    cursor += glyph.advance;
                }
                None => cursor += self.fallback_advance,
            }
        }
        GlyphRun {
            advance: cursor as f64 * scale,
            strokes,
        }
    }
}
