use geo::Buffer;
use itertools::Itertools;

use crate::geometry::primitives::{Point, SPolygon};

/// Shrinks `shape` inwards by `distance` (negative buffer with round joins).
/// Relies on the [`geo`](https://crates.io/crates/geo) crate.
///
/// What remains is every point of `shape` at least `distance` away from its boundary.
/// Returns every disjoint region, an empty vector once the shape has vanished.
/// Regions that collapsed to zero area are not reported, holes are ignored.
pub fn erode(shape: &SPolygon, distance: f64) -> Vec<SPolygon> {
    let geo_poly = geo_types::Polygon::from(shape);

    geo_poly
        .buffer(-distance)
        .into_iter()
        .filter_map(|region| {
            let mut points = region
                .exterior()
                .points()
                .map(|p| Point(p.x(), p.y()))
                .collect_vec();

            //pop the last point if it is the same as the first
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }
            SPolygon::new(points).ok()
        })
        .collect()
}
