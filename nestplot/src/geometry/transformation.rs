use crate::geometry::primitives::Point;

/// Proper rigid transformation in matrix form.
/// Angles are in radians, positive angles rotate counterclockwise.
///
/// Entries are plain floats: coordinates beyond the range of `f64` turn into infinities or NaN,
/// which downstream consumers treat as degenerate geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformation {
    matrix: [[f64; 3]; 3],
}

impl Transformation {
    pub const IDENTITY: Transformation = Transformation {
        matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Rotation by `angle` around `pivot` instead of the origin.
    pub fn from_rotation_about(angle: f64, Point(cx, cy): Point) -> Self {
        Self::IDENTITY
            .translate((-cx, -cy))
            .rotate(angle)
            .translate((cx, cy))
    }

    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.matrix
    }

    fn rotate(mut self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let rot = [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]];
        self.matrix = dot_prod(&rot, &self.matrix);
        self
    }

    fn translate(mut self, (tx, ty): (f64, f64)) -> Self {
        let transl = [[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]];
        self.matrix = dot_prod(&transl, &self.matrix);
        self
    }
}

#[inline(always)]
fn dot_prod(l: &[[f64; 3]; 3], r: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let cell = |i: usize, j: usize| l[i][0] * r[0][j] + l[i][1] * r[1][j] + l[i][2] * r[2][j];
    [
        [cell(0, 0), cell(0, 1), cell(0, 2)],
        [cell(1, 0), cell(1, 1), cell(1, 2)],
        [cell(2, 0), cell(2, 1), cell(2, 2)],
    ]
}
