use std::collections::VecDeque;

use anyhow::{Result, ensure};
use log::{debug, warn};

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect, SPolygon};
use crate::geometry::repair_ring;
use crate::interior::{Anchor, InteriorPointStrategy};

/// Anchors labels at the [Pole of Inaccessibility (PoI)](https://en.wikipedia.org/wiki/Pole_of_inaccessibility):
/// the point of the polygon's outer ring farthest from its boundary.
/// Inspired by Mapbox's [`polylabel`](https://github.com/mapbox/polylabel) algorithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoleOfInaccessibility {
    precision: f64,
    max_depth: usize,
}

impl PoleOfInaccessibility {
    pub fn new(precision: f64) -> Result<Self> {
        ensure!(
            precision.is_finite() && precision > 0.0,
            "pole precision must be positive and finite, got {precision}"
        );
        Ok(Self {
            precision,
            max_depth: MAX_POI_TREE_DEPTH,
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Computes the pole of `shape` as a point and its distance to the boundary
    pub fn compute_pole(&self, shape: &SPolygon) -> Option<(Point, f64)> {
        let square_bbox = shape.bbox.inflate_to_square();
        let root = POINode::new(square_bbox, self.max_depth, shape);
        let mut queue = VecDeque::from([root]);

        //the centroid is a decent first guess for most shapes
        let mut best: Option<(Point, f64)> = {
            let centroid = shape.centroid();
            let distance = shape.signed_distance(&centroid);
            (distance > 0.0).then_some((centroid, distance))
        };
        let distance = |best: &Option<(Point, f64)>| best.map_or(0.0, |(_, d)| d);

        while let Some(node) = queue.pop_front() {
            //check if better than current best
            if node.distance > distance(&best) {
                best = Some((node.bbox.centroid(), node.distance));
            }

            //see if worth it to split
            if node.distance_upperbound() - distance(&best) > self.precision
                && let Some(children) = node.split(shape)
            {
                queue.extend(children);
            }
        }
        best
    }
}

impl InteriorPointStrategy for PoleOfInaccessibility {
    fn anchor(&self, vertices: &[Point]) -> Anchor {
        let Some(shape) = repair_ring(vertices) else {
            warn!("[POLE] no interior left after repair, {} vertices", vertices.len());
            return Anchor::SENTINEL;
        };

        match self.compute_pole(&shape) {
            Some((point, distance)) => {
                debug!("[POLE] found pole at {point:?} with distance {distance:.3}");
                Anchor {
                    point,
                    size: 2.0 * distance,
                }
            }
            None => {
                warn!(
                    "[POLE] no interior point found within {} levels, shape: {:?}",
                    self.max_depth, &shape.vertices
                );
                Anchor::SENTINEL
            }
        }
    }
}

const MAX_POI_TREE_DEPTH: usize = 16;

struct POINode {
    pub level: usize,
    pub bbox: Rect,
    pub radius: f64,
    pub distance: f64,
}

impl POINode {
    fn new(bbox: Rect, level: usize, poly: &SPolygon) -> Self {
        let radius = bbox.diameter() / 2.0;

        //if the centroid is outside, distance is counted negative
        let distance = poly.signed_distance(&bbox.centroid());

        Self {
            bbox,
            level,
            radius,
            distance,
        }
    }

    fn split(&self, poly: &SPolygon) -> Option<[POINode; 4]> {
        match self.level {
            0 => None,
            _ => Some(
                self.bbox
                    .quadrants()
                    .map(|qd| POINode::new(qd, self.level - 1, poly)),
            ),
        }
    }

    fn distance_upperbound(&self) -> f64 {
        self.radius + self.distance
    }
}
