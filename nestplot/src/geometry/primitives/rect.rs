use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;

///Axis-aligned rectangle.
///Unlike a polygon, a rectangle is allowed to have zero width or height.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// The box reported for a sequence without any points
    pub const ZERO: Rect = Rect {
        x_min: 0.0,
        y_min: 0.0,
        x_max: 0.0,
        y_max: 0.0,
    };

    /// Bounding box of a sequence of points.
    /// Returns [`Rect::ZERO`] for an empty sequence, which callers should treat as "no geometry".
    pub fn bounding<'a>(points: impl IntoIterator<Item = &'a Point>) -> Rect {
        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            return Rect::ZERO;
        }

        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Returns a new rectangle with the same centroid but inflated
    /// to be the minimum square that contains `self`.
    pub fn inflate_to_square(&self) -> Rect {
        let width = self.x_max - self.x_min;
        let height = self.y_max - self.y_min;
        let mut dx = 0.0;
        let mut dy = 0.0;
        if height < width {
            dy = (width - height) / 2.0;
        } else if width < height {
            dx = (height - width) / 2.0;
        }
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Returns the 4 quadrants of `self`.
    /// Ordered in the same way as quadrants in a cartesian plane:
    /// <https://en.wikipedia.org/wiki/Quadrant_(plane_geometry)>
    pub fn quadrants(&self) -> [Self; 4] {
        let Point(x_mid, y_mid) = self.centroid();
        let (x_min, y_min, x_max, y_max) = (self.x_min, self.y_min, self.x_max, self.y_max);

        let q1 = Rect {
            x_min: x_mid,
            y_min: y_mid,
            x_max,
            y_max,
        };
        let q2 = Rect {
            x_min,
            y_min: y_mid,
            x_max: x_mid,
            y_max,
        };
        let q3 = Rect {
            x_min,
            y_min,
            x_max: x_mid,
            y_max: y_mid,
        };
        let q4 = Rect {
            x_min: x_mid,
            y_min,
            x_max,
            y_max: y_mid,
        };

        [q1, q2, q3, q4]
    }

    pub fn min_corner(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Length of the diagonal
    pub fn diameter(&self) -> f64 {
        (self.width().powi(2) + self.height().powi(2)).sqrt()
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
