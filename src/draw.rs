//! Drawing surfaces
//!
//! Entities render themselves by issuing line-segment requests to a
//! [`DrawSurface`]. The surface is borrowed for a single `draw` call and is
//! never retained by the entity. How and when the segments are flushed to a
//! screen, plotter or file is up to the surface.

use crate::types::{BoundingBox2D, Vector2};

/// Rendering capability consumed by [`Entity::draw`](crate::entities::Entity::draw)
pub trait DrawSurface {
    /// Render a straight segment from `a` to `b`
    fn draw_segment(&mut self, a: Vector2, b: Vector2);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn draw_segment(&mut self, a: Vector2, b: Vector2) {
        (**self).draw_segment(a, b);
    }
}

/// A surface that records every segment request in draw order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentRecorder {
    segments: Vec<(Vector2, Vector2)>,
}

impl SegmentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded segments, in the order they were requested
    pub fn segments(&self) -> &[(Vector2, Vector2)] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Extent of everything drawn so far
    pub fn extents(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(self.segments.iter().flat_map(|&(a, b)| [a, b]))
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn into_segments(self) -> Vec<(Vector2, Vector2)> {
        self.segments
    }
}

impl DrawSurface for SegmentRecorder {
    fn draw_segment(&mut self, a: Vector2, b: Vector2) {
        self.segments.push((a, b));
    }
}
