//! Axis-aligned bounding box for 2D entities

use super::Vector2;
use std::fmt;

/// 2D axis-aligned bounding box
///
/// The empty box is stored inverted (`min = +inf`, `max = -inf`), so it
/// contains nothing, merges as an identity, and can never equal a box built
/// from a real point. NaN coordinates are skipped when a box grows, so a
/// NaN component leaves that axis at its previous extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum point (lower-left corner)
    pub min: Vector2,
    /// Maximum point (upper-right corner)
    pub max: Vector2,
}

impl BoundingBox2D {
    /// Create a bounding box from its corners
    pub fn new(min: Vector2, max: Vector2) -> Self {
        BoundingBox2D { min, max }
    }

    /// The canonical empty bounding box
    pub const fn empty() -> Self {
        BoundingBox2D {
            min: Vector2::new(f64::INFINITY, f64::INFINITY),
            max: Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// True only for the canonical empty box
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Degenerate box around a single point
    pub fn from_point(point: Vector2) -> Self {
        BoundingBox2D {
            min: point,
            max: point,
        }
    }

    /// Smallest box containing every point; empty for an empty iterator
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2>,
    {
        points.into_iter().fold(Self::empty(), |mut bbox, point| {
            bbox.expand_to_include(point);
            bbox
        })
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }

    /// Center point; `None` for the empty box
    pub fn center(&self) -> Option<Vector2> {
        if self.is_empty() {
            return None;
        }
        Some((self.min + self.max) / 2.0)
    }

    /// Check whether a point lies inside or on the border
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Grow the box to include a point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Union of two boxes
    pub fn merge(&self, other: &BoundingBox2D) -> BoundingBox2D {
        BoundingBox2D {
            min: Vector2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vector2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "BBox2D[empty]")
        } else {
            write!(f, "BBox2D[{} -> {}]", self.min, self.max)
        }
    }
}
