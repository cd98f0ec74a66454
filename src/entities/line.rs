//! Line entity

use super::{Entity, EntityClone, EntityCommon};
use crate::draw::DrawSurface;
use crate::types::{BoundingBox2D, Matrix3, Vector2};

/// A line entity defined by two endpoints
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line
    pub start: Vector2,
    /// End point of the line
    pub end: Vector2,
}

impl Line {
    /// Create a new line from origin to origin
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            start: Vector2::ZERO,
            end: Vector2::ZERO,
        }
    }

    pub fn from_points(start: Vector2, end: Vector2) -> Self {
        Line {
            start,
            end,
            ..Self::new()
        }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line::from_points(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Unit direction from start to end
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start).normalize()
    }

    pub fn midpoint(&self) -> Vector2 {
        (self.start + self.end) / 2.0
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.draw_segment(self.start, self.end);
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points([self.start, self.end])
    }

    fn translate(&mut self, offset: Vector2) {
        self.start = self.start + offset;
        self.end = self.end + offset;
    }

    fn transform_by(&mut self, matrix: &Matrix3) {
        self.start = matrix * self.start;
        self.end = matrix * self.end;
    }

    fn entity_type(&self) -> &'static str {
        "LINE"
    }
}

impl EntityClone for Line {
    fn create_instance() -> Self {
        Line::new()
    }

    fn copy_geometry_to(&self, target: &mut Self) {
        target.start = self.start;
        target.end = self.end;
    }
}
