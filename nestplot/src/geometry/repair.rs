use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::geometry::primitives::{Edge, Point, SPolygon};

/// Turns an arbitrary ring of vertices into a valid [`SPolygon`], if any area remains.
///
/// Non-finite vertices and repeated vertices are dropped. A self-intersecting ring is split at its
/// crossings into simple loops, of which the one with the largest area is kept.
/// Returns `None` when nothing with a positive area is left.
pub fn repair_ring(vertices: &[Point]) -> Option<SPolygon> {
    let ring = dedup_ring(vertices.iter().copied().filter(Point::is_finite));
    if ring.len() < 3 {
        debug!("[REPAIR] ring with {} distinct vertices has no interior", ring.len());
        return None;
    }

    let loops = split_into_simple_loops(ring);
    if loops.len() > 1 {
        debug!("[REPAIR] self-intersecting ring split into {} loops", loops.len());
    }

    loops
        .into_iter()
        .filter_map(|l| SPolygon::new(l).ok())
        .max_by_key(|sp| OrderedFloat(sp.area))
}

fn dedup_ring(points: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut ring: Vec<Point> = vec![];
    for p in points {
        if ring.last().is_none_or(|last| !last.almost_eq(&p)) {
            ring.push(p);
        }
    }
    //the closing vertex is implicit
    while ring.len() > 1 && ring[0].almost_eq(&ring[ring.len() - 1]) {
        ring.pop();
    }
    ring
}

fn split_into_simple_loops(ring: Vec<Point>) -> Vec<Vec<Point>> {
    let mut pending = vec![ring];
    let mut simple = vec![];

    while let Some(ring) = pending.pop() {
        if ring.len() < 3 {
            continue;
        }
        match first_crossing(&ring) {
            None => simple.push(ring),
            Some((i, j, crossing)) => {
                //both loops are strictly shorter than the ring they came from
                let inner = std::iter::once(crossing).chain(ring[i + 1..=j].iter().copied());
                let outer = ring[j + 1..]
                    .iter()
                    .chain(ring[..=i].iter())
                    .copied()
                    .chain(std::iter::once(crossing));
                pending.push(dedup_ring(inner));
                pending.push(dedup_ring(outer));
            }
        }
    }
    simple
}

/// Finds the first pair of non-adjacent edges `(i, j)` that cross, along with the crossing point
fn first_crossing(ring: &[Point]) -> Option<(usize, usize, Point)> {
    let n = ring.len();
    let edge = |i: usize| Edge {
        start: ring[i],
        end: ring[(i + 1) % n],
    };

    (0..n)
        .tuple_combinations()
        .filter(|&(i, j)| j - i > 1 && !(i == 0 && j == n - 1))
        .find_map(|(i, j)| edge(i).collides_at(&edge(j)).map(|p| (i, j, p)))
}
