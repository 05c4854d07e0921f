use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageOrientation {
    /// The bin keeps its orientation on the page
    #[default]
    Landscape,
    /// The bin is turned a quarter, its width runs along the page height
    Portrait,
}

/// Maps layout coordinates of a bin onto a page surrounded by a margin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageFrame {
    pub bin_width: f64,
    pub bin_height: f64,
    pub margin: f64,
    pub orientation: PageOrientation,
}

impl PageFrame {
    pub fn new(
        bin_width: f64,
        bin_height: f64,
        margin: f64,
        orientation: PageOrientation,
    ) -> Result<Self> {
        ensure!(
            bin_width.is_finite() && bin_height.is_finite() && bin_width > 0.0 && bin_height > 0.0,
            "invalid bin size: {bin_width} x {bin_height}"
        );
        ensure!(
            margin.is_finite() && margin >= 0.0,
            "invalid page margin: {margin}"
        );
        Ok(PageFrame {
            bin_width,
            bin_height,
            margin,
            orientation,
        })
    }

    /// (width, height) of the page
    pub fn page_size(&self) -> (f64, f64) {
        let m2 = 2.0 * self.margin;
        match self.orientation {
            PageOrientation::Landscape => (self.bin_width + m2, self.bin_height + m2),
            PageOrientation::Portrait => (self.bin_height + m2, self.bin_width + m2),
        }
    }

    pub fn to_page(&self, Point(x, y): Point) -> Point {
        let m = self.margin;
        match self.orientation {
            PageOrientation::Landscape => Point(x + m, y + m),
            PageOrientation::Portrait => Point(self.bin_height - y + m, x + m),
        }
    }

    /// Corners of the bin in page coordinates
    pub fn bin_outline(&self) -> [Point; 4] {
        let (w, h) = (self.bin_width, self.bin_height);
        [
            Point(0.0, 0.0),
            Point(w, 0.0),
            Point(w, h),
            Point(0.0, h),
        ]
        .map(|p| self.to_page(p))
    }
}
