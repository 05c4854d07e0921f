use std::ops::AddAssign;

use anyhow::Result;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::entities::{Bin, LabelSource, PieceCatalog};
use crate::interior::{Anchor, InteriorPointStrategy};
use crate::label::layout_label;
use crate::placement::place_bin;
use crate::render::{DrawOp, DrawingSink, GlyphProvider, PageDrawing, PageFrame, RenderTheme};

/// Totals over all rendered pages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub n_pages: usize,
    pub n_pieces: usize,
    pub n_skipped: usize,
    pub n_unanchored: usize,
}

impl AddAssign<&PageDrawing> for RenderStats {
    fn add_assign(&mut self, page: &PageDrawing) {
        self.n_pages += 1;
        self.n_pieces += page.n_pieces;
        self.n_skipped += page.n_skipped;
        self.n_unanchored += page.n_unanchored;
    }
}

/// Turns bins of placement records into pages of drawing instructions.
///
/// Per piece: the placed polygon is filled and stroked, an anchor is computed on the placed
/// vertices (layout coordinates), mapped onto the page, and the piece's label is laid out
/// upright around it.
pub struct LayoutRenderer<'a, G: GlyphProvider> {
    pub catalog: &'a PieceCatalog,
    pub labels: &'a LabelSource,
    pub glyphs: &'a G,
    pub strategy: &'a dyn InteriorPointStrategy,
    pub frame: PageFrame,
    pub theme: &'a RenderTheme,
}

impl<'a, G: GlyphProvider> LayoutRenderer<'a, G> {
    pub fn new(
        catalog: &'a PieceCatalog,
        labels: &'a LabelSource,
        glyphs: &'a G,
        strategy: &'a dyn InteriorPointStrategy,
        frame: PageFrame,
        theme: &'a RenderTheme,
    ) -> Self {
        Self {
            catalog,
            labels,
            glyphs,
            strategy,
            frame,
            theme,
        }
    }

    pub fn draw_bin(&self, bin: &Bin) -> PageDrawing {
        let (width, height) = self.frame.page_size();
        let mut ops = vec![DrawOp::Polygon {
            vertices: self.frame.bin_outline().to_vec(),
            style: self.theme.bin_style(),
        }];

        let placed = place_bin(self.catalog, bin);
        let mut n_unanchored = 0;

        for piece in &placed {
            ops.push(DrawOp::Polygon {
                vertices: piece
                    .vertices
                    .iter()
                    .map(|&p| self.frame.to_page(p))
                    .collect_vec(),
                style: self.theme.piece_style(piece.index),
            });

            let anchor = self.strategy.anchor(&piece.vertices);
            if anchor == Anchor::SENTINEL {
                n_unanchored += 1;
            }
            let anchor = Anchor {
                point: self.frame.to_page(anchor.point),
                size: anchor.size,
            };

            let label = self.labels.label_for(&piece.id);
            let layout = layout_label(&label, &anchor, self.glyphs);
            debug!(
                "[RENDER] bin {}: piece {} anchored at ({:.3}, {:.3}), size: {:.3}, label: {:?}",
                bin.number, piece.id, anchor.point.0, anchor.point.1, anchor.size, label
            );

            for segment in layout
                .segments
                .iter()
                .filter(|s| !s.text.is_empty() && s.scale > 0.0)
            {
                let color = self.theme.label_color(segment.role);
                ops.extend(
                    segment
                        .strokes()
                        .filter(|stroke| stroke.len() >= 2)
                        .map(|points| DrawOp::Polyline {
                            points,
                            color,
                            width: self.theme.label_stroke_width,
                        }),
                );
            }
        }

        PageDrawing {
            number: bin.number,
            width,
            height,
            ops,
            n_pieces: placed.len(),
            n_skipped: bin.placements.len() - placed.len(),
            n_unanchored,
        }
    }

    /// Draws all bins, in parallel if requested. Pages are returned in bin order either way.
    pub fn draw_all(&self, bins: &[Bin], parallel: bool) -> Vec<PageDrawing> {
        match parallel {
            true => bins.par_iter().map(|bin| self.draw_bin(bin)).collect(),
            false => bins.iter().map(|bin| self.draw_bin(bin)).collect(),
        }
    }

    /// Draws all bins and replays the pages into `sink` in bin order, then finalizes it.
    pub fn render<S: DrawingSink + ?Sized>(
        &self,
        bins: &[Bin],
        sink: &mut S,
        parallel: bool,
    ) -> Result<RenderStats> {
        let mut stats = RenderStats::default();
        for page in self.draw_all(bins, parallel) {
            page.replay(sink)?;
            info!(
                "[RENDER] bin {}: {} pieces drawn, {} skipped, {} without anchor",
                page.number, page.n_pieces, page.n_skipped, page.n_unanchored
            );
            stats += &page;
        }
        sink.finalize()?;
        Ok(stats)
    }
}
