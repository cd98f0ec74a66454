//! Homogeneous 2D transformation matrix
//!
//! `Matrix3` stores a 3x3 matrix in row-major order and acts on column vectors
//! `(x, y, 1)`. Rotation, scaling, shear and translation all compose with `*`;
//! `a * b` applies `b` first.

use crate::types::Vector2;
use std::ops::Mul;

/// 3x3 matrix for 2D affine and projective transformations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    /// Matrix elements stored in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Identity matrix
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create matrix from rows
    pub const fn from_rows(row0: [f64; 3], row1: [f64; 3], row2: [f64; 3]) -> Self {
        Self {
            m: [row0, row1, row2],
        }
    }

    /// Translation by `offset`
    pub fn translation(offset: Vector2) -> Self {
        Self::from_rows(
            [1.0, 0.0, offset.x],
            [0.0, 1.0, offset.y],
            [0.0, 0.0, 1.0],
        )
    }

    /// Counter-clockwise rotation about the origin (radians)
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0])
    }

    /// Counter-clockwise rotation about `center` (radians)
    pub fn rotation_about(center: Vector2, angle: f64) -> Self {
        Self::translation(center) * Self::rotation(angle) * Self::translation(-center)
    }

    /// Non-uniform scaling about the origin
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::from_rows([sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0])
    }

    /// Non-uniform scaling with `origin` as the fixed point
    pub fn scaling_about(sx: f64, sy: f64, origin: Vector2) -> Self {
        Self::translation(origin) * Self::scaling(sx, sy) * Self::translation(-origin)
    }

    /// Shear: `x' = x + shx * y`, `y' = y + shy * x`
    pub fn shear(shx: f64, shy: f64) -> Self {
        Self::from_rows([1.0, shx, 0.0], [shy, 1.0, 0.0], [0.0, 0.0, 1.0])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_rows(
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        )
    }

    pub fn determinant(&self) -> f64 {
        nalgebra::Matrix3::<f64>::from(*self).determinant()
    }

    /// Inverse matrix, or `None` if the matrix is singular
    pub fn inverse(&self) -> Option<Self> {
        nalgebra::Matrix3::<f64>::from(*self)
            .try_inverse()
            .map(Self::from)
    }

    /// True when the bottom row is `[0, 0, 1]`
    pub fn is_affine(&self) -> bool {
        self.m[2] == [0.0, 0.0, 1.0]
    }

    /// Apply the matrix to a point in homogeneous coordinates
    ///
    /// The result is divided by the homogeneous weight as given. For affine
    /// matrices the weight is exactly 1; a zero weight yields infinite or NaN
    /// coordinates.
    pub fn transform_point(&self, p: Vector2) -> Vector2 {
        let m = &self.m;
        let x = m[0][0] * p.x + m[0][1] * p.y + m[0][2];
        let y = m[1][0] * p.x + m[1][1] * p.y + m[1][2];
        let w = m[2][0] * p.x + m[2][1] * p.y + m[2][2];

        Vector2::new(x / w, y / w)
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Self { m: result }
    }
}

impl Mul<Vector2> for Matrix3 {
    type Output = Vector2;

    fn mul(self, p: Vector2) -> Self::Output {
        self.transform_point(p)
    }
}

impl Mul<Vector2> for &Matrix3 {
    type Output = Vector2;

    fn mul(self, p: Vector2) -> Self::Output {
        self.transform_point(p)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix3> for nalgebra::Matrix3<f64> {
    #[rustfmt::skip]
    fn from(value: Matrix3) -> Self {
        let m = &value.m;
        nalgebra::Matrix3::new(
            m[0][0], m[0][1], m[0][2],
            m[1][0], m[1][1], m[1][2],
            m[2][0], m[2][1], m[2][2],
        )
    }
}

impl From<nalgebra::Matrix3<f64>> for Matrix3 {
    fn from(value: nalgebra::Matrix3<f64>) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = value[(i, j)];
            }
        }
        Self { m }
    }
}
