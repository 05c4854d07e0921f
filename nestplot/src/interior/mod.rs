mod erosion;
mod pole;

#[doc(inline)]
pub use erosion::Erosion;
#[doc(inline)]
pub use pole::PoleOfInaccessibility;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;
use crate::geometry::primitives::SPolygon;

/// A point deep inside a polygon, paired with the room available around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub point: Point,
    /// Twice the distance from `point` to the boundary of the polygon
    pub size: f64,
}

impl Anchor {
    /// Reported for polygons without any interior
    pub const SENTINEL: Anchor = Anchor {
        point: Point::ORIGIN,
        size: 0.0,
    };

    /// Anchor at `point`, sized by its distance to the boundary of `shape`
    pub fn within(shape: &SPolygon, point: Point) -> Self {
        Anchor {
            point,
            size: 2.0 * shape.distance_to_boundary(&point),
        }
    }
}

/// Finds a label anchor inside a (possibly non-convex, possibly invalid) polygon.
///
/// Implementations never fail: degenerate geometry resolves to [`Anchor::SENTINEL`].
pub trait InteriorPointStrategy: Send + Sync {
    fn anchor(&self, vertices: &[Point]) -> Anchor;
}

/// Serializable selection of an [`InteriorPointStrategy`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum AnchorStrategyConfig {
    /// See [`Erosion`]
    Erosion {
        /// Distance by which the polygon shrinks every iteration
        step: f64,
        /// Upper bound on the number of erosion steps
        #[serde(default = "default_max_iterations")]
        max_iterations: usize,
    },
    /// See [`PoleOfInaccessibility`]
    Pole {
        /// Refinement stops once no cell can improve the best distance by more than this
        precision: f64,
        /// Maximum depth of the quadtree refinement
        #[serde(default = "default_max_depth")]
        max_depth: usize,
    },
}

impl AnchorStrategyConfig {
    pub fn erosion(step: f64) -> Self {
        AnchorStrategyConfig::Erosion {
            step,
            max_iterations: default_max_iterations(),
        }
    }

    pub fn pole(precision: f64) -> Self {
        AnchorStrategyConfig::Pole {
            precision,
            max_depth: default_max_depth(),
        }
    }

    pub fn build(&self) -> Result<Box<dyn InteriorPointStrategy>> {
        Ok(match *self {
            AnchorStrategyConfig::Erosion {
                step,
                max_iterations,
            } => Box::new(Erosion::new(step)?.with_max_iterations(max_iterations)),
            AnchorStrategyConfig::Pole {
                precision,
                max_depth,
            } => Box::new(PoleOfInaccessibility::new(precision)?.with_max_depth(max_depth)),
        })
    }
}

fn default_max_iterations() -> usize {
    10_000
}

fn default_max_depth() -> usize {
    16
}
