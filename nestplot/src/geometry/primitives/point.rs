use std::hash::{Hash, Hasher};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{DistanceTo, Transformable};
use crate::util::FPA;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Transformable for Point {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Point(x, y) = self;
        let (tx, ty) = TRANSFORM_FORMULA(*x, *y, t);
        *x = tx;
        *y = ty;
        self
    }
}

const TRANSFORM_FORMULA: fn(f64, f64, &Transformation) -> (f64, f64) = |x, y, t| -> (f64, f64) {
    let m = t.matrix();

    let t_x = m[0][0] * x + m[0][1] * y + m[0][2];
    let t_y = m[1][0] * x + m[1][1] * y + m[1][2];

    (t_x, t_y)
};

impl Point {
    pub const ORIGIN: Point = Point(0.0, 0.0);

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    /// Equality within floating point tolerance, see [`FPA`]
    pub fn almost_eq(&self, other: &Point) -> bool {
        FPA(self.0) == FPA(other.0) && FPA(self.1) == FPA(other.1)
    }

    /// Rotates the point counterclockwise by `degrees` around `center`.
    pub fn rotate_about(self, degrees: f64, center: Point) -> Point {
        self.transform_clone(&Transformation::from_rotation_about(
            degrees.to_radians(),
            center,
        ))
    }

    pub fn translate(self, (dx, dy): (f64, f64)) -> Point {
        Point(self.0 + dx, self.1 + dy)
    }
}

impl DistanceTo<Point> for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    fn sq_distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = self.0.to_bits();
        let y = self.1.to_bits();
        x.hash(state);
        y.hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}
