use anyhow::{Result, bail};
use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::util::FPA;

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// Vertices are always stored counterclockwise, the closing vertex is implicit.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Set of points that form the polygon
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f64,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points.
    /// Self-intersections are not checked here, see [`repair_ring`](crate::geometry::repair_ring) for that.
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            bail!("Simple polygon must have at least 3 points: {points:?}");
        }
        if points.iter().any(|p| !p.is_finite()) {
            bail!("Simple polygon contains non-finite points: {points:?}");
        }

        let area = match SPolygon::calculate_area(&points) {
            area if FPA(area) == FPA(0.0) => bail!("Simple polygon has no area: {points:?}"),
            area if area < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                points.reverse();
                -area
            }
            area => area,
        };

        let bbox = Rect::bounding(&points);

        Ok(SPolygon {
            vertices: points,
            bbox,
            area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }

    /// Distance from `point` to the closest edge, regardless of whether `point` lies inside.
    pub fn distance_to_boundary(&self, point: &Point) -> f64 {
        self.edge_iter()
            .map(|e| e.sq_distance_to(point))
            .min_by_key(|sq_d| OrderedFloat(*sq_d))
            .map_or(0.0, f64::sqrt)
    }

    /// Distance to the boundary, negative when `point` lies outside the polygon.
    pub fn signed_distance(&self, point: &Point) -> f64 {
        let distance = self.distance_to_boundary(point);
        match self.collides_with(point) {
            true => distance,
            false => -distance,
        }
    }
}

impl Shape for SPolygon {
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for i in 0..self.n_vertices() {
            let j = (i + 1) % self.n_vertices();
            let Point(x_i, y_i) = self.vertex(i);
            let Point(x_j, y_j) = self.vertex(j);
            c_x += (x_i + x_j) * (x_i * y_j - x_j * y_i);
            c_y += (y_i + y_j) * (x_i * y_j - x_j * y_i);
        }

        c_x /= 6.0 * self.area;
        c_y /= 6.0 * self.area;

        Point(c_x, c_y)
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl CollidesWith<Point> for SPolygon {
    fn collides_with(&self, point: &Point) -> bool {
        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        //a horizontal ray is shot to the right, every edge straddling its height is counted once
        match self.bbox.collides_with(point) {
            false => false,
            true => {
                let Point(p_x, p_y) = *point;
                let mut inside = false;
                for edge in self.edge_iter() {
                    let Point(s_x, s_y) = edge.start;
                    let Point(e_x, e_y) = edge.end;
                    if (s_y > p_y) != (e_y > p_y) {
                        let x_cross = s_x + (p_y - s_y) * (e_x - s_x) / (e_y - s_y);
                        if p_x < x_cross {
                            inside = !inside;
                        }
                    }
                }
                inside
            }
        }
    }
}

impl From<&SPolygon> for geo_types::Polygon<f64> {
    fn from(sp: &SPolygon) -> Self {
        let exterior = sp.vertices.iter().map(|p| (p.0, p.1)).collect::<Vec<_>>();
        geo_types::Polygon::new(geo_types::LineString::from(exterior), vec![])
    }
}
