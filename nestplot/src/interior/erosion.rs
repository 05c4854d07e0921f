use anyhow::{Result, ensure};
use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Point;
use crate::geometry::{erode, repair_ring};
use crate::interior::{Anchor, InteriorPointStrategy};

/// Anchors labels by repeatedly eroding the polygon until it vanishes.
///
/// Whenever an erosion splits the region, only the largest part is eroded further.
/// The anchor is the centroid of the last region before it disappeared, its size is
/// measured against the boundary of the original (repaired) polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Erosion {
    step: f64,
    max_iterations: usize,
}

impl Erosion {
    pub fn new(step: f64) -> Result<Self> {
        ensure!(
            step.is_finite() && step > 0.0,
            "erosion step must be positive and finite, got {step}"
        );
        Ok(Self {
            step,
            max_iterations: usize::MAX,
        })
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }
}

impl InteriorPointStrategy for Erosion {
    fn anchor(&self, vertices: &[Point]) -> Anchor {
        let Some(shape) = repair_ring(vertices) else {
            warn!("[EROSION] no interior left after repair, {} vertices", vertices.len());
            return Anchor::SENTINEL;
        };

        let mut last = shape.clone();
        let mut n_iterations = 0;
        loop {
            if n_iterations == self.max_iterations {
                warn!(
                    "[EROSION] region did not vanish after {n_iterations} steps of {}, using the last one",
                    self.step
                );
                break;
            }
            let largest = erode(&last, self.step)
                .into_iter()
                .max_by_key(|region| OrderedFloat(region.area));
            match largest {
                Some(region) => last = region,
                None => break,
            }
            n_iterations += 1;
        }

        let anchor = Anchor::within(&shape, last.centroid());
        debug!(
            "[EROSION] vanished after {n_iterations} steps, anchor: {:?}, size: {:.3}",
            anchor.point, anchor.size
        );
        anchor
    }
}
