//! 2D point/vector value type

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 2D vector, also used for points in drawing coordinates
///
/// `Vector2` is a plain `Copy` value. Every operator returns a new value and
/// leaves its operands untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Zero vector (also the drawing origin)
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector2 = Vector2::new(1.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector2 = Vector2::new(0.0, 1.0);

    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Length (magnitude)
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Unit-length copy; the zero vector is returned unchanged
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            *self / len
        } else {
            *self
        }
    }

    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product
    pub fn cross(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Distance between two points
    pub fn distance(&self, other: &Vector2) -> f64 {
        (*other - *self).length()
    }

    /// True when both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_return_new_values() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);

        assert_eq!(a + b, Vector2::new(4.0, 6.0));
        assert_eq!(b - a, Vector2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, 2.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));

        // operands are untouched
        assert_eq!(a, Vector2::new(1.0, 2.0));
        assert_eq!(b, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_length_and_distance() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(Vector2::ZERO.distance(&v), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector2::new(0.0, 7.5).normalize();
        assert_eq!(n, Vector2::UNIT_Y);
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    }

    #[test]
    fn test_dot_and_cross() {
        assert_eq!(Vector2::UNIT_X.dot(&Vector2::UNIT_Y), 0.0);
        assert_eq!(Vector2::UNIT_X.cross(&Vector2::UNIT_Y), 1.0);
        assert_eq!(Vector2::UNIT_Y.cross(&Vector2::UNIT_X), -1.0);
    }

    #[test]
    fn test_from_tuple_and_display() {
        let v: Vector2 = (1.5, -2.0).into();
        assert_eq!(v, Vector2::new(1.5, -2.0));
        assert_eq!(v.to_string(), "(1.5, -2)");
    }

    #[test]
    fn test_is_finite() {
        assert!(Vector2::new(1.0, 2.0).is_finite());
        assert!(!Vector2::new(f64::INFINITY, 0.0).is_finite());
        assert!(!Vector2::new(0.0, f64::NAN).is_finite());
    }
}
