//! Polyline entity: an ordered, optionally closed chain of 2D vertices

use super::{Entity, EntityClone, EntityCommon};
use crate::draw::DrawSurface;
use crate::error::{DraftError, Result};
use crate::types::{BoundingBox2D, Matrix3, Vector2};
use tracing::{debug, trace};

/// A 2D polyline
///
/// Consecutive vertices are joined by straight segments in insertion order.
/// A closed polyline with more than two vertices also joins its last vertex
/// back to the first; with two or fewer the flag has no geometric effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    vertices: Vec<Vector2>,
    closed: bool,
}

impl Polyline {
    /// Create a new empty, open polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            closed: false,
        }
    }

    /// Create an open polyline through the given points
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2>,
    {
        Polyline {
            vertices: points.into_iter().collect(),
            ..Self::new()
        }
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Read-only view of the vertices in order
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Close the polyline
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Append a vertex after the current last one
    pub fn add_point(&mut self, point: Vector2) {
        self.vertices.push(point);
    }

    /// Insert a vertex at `index`, shifting later vertices up by one
    ///
    /// `index` may equal the vertex count, which appends.
    pub fn add_vertex_at(&mut self, index: usize, point: Vector2) -> Result<()> {
        if index > self.vertices.len() {
            return Err(self.out_of_range(index, "add_vertex_at"));
        }
        self.vertices.insert(index, point);
        Ok(())
    }

    /// Remove and return the vertex at `index`, shifting later vertices down
    pub fn remove_vertex_at(&mut self, index: usize) -> Result<Vector2> {
        if index >= self.vertices.len() {
            return Err(self.out_of_range(index, "remove_vertex_at"));
        }
        Ok(self.vertices.remove(index))
    }

    /// Get the vertex at `index`
    pub fn point_at(&self, index: usize) -> Result<Vector2> {
        self.vertices
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index, "point_at"))
    }

    /// Replace the vertex at `index` in place
    pub fn set_point_at(&mut self, index: usize, point: Vector2) -> Result<()> {
        if index >= self.vertices.len() {
            return Err(self.out_of_range(index, "set_point_at"));
        }
        self.vertices[index] = point;
        Ok(())
    }

    /// Segments in draw order, including the closing segment when drawn
    pub fn segments(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let closing = match (self.vertices.last(), self.vertices.first()) {
            (Some(&last), Some(&first)) if self.has_closing_segment() => Some((last, first)),
            _ => None,
        };

        self.vertices
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }

    /// Total length of the drawn segments
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(&b)).sum()
    }

    fn has_closing_segment(&self) -> bool {
        self.closed && self.vertices.len() > 2
    }

    fn out_of_range(&self, index: usize, operation: &'static str) -> DraftError {
        let len = self.vertices.len();
        debug!(index, len, operation, "vertex index out of range");
        DraftError::OutOfRange { index, len }
    }
}

impl Entity for Polyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        let mut count = 0usize;
        for (a, b) in self.segments() {
            surface.draw_segment(a, b);
            count += 1;
        }
        trace!(
            segments = count,
            closing = self.has_closing_segment(),
            "drew polyline"
        );
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(self.vertices.iter().copied())
    }

    fn translate(&mut self, offset: Vector2) {
        for vertex in &mut self.vertices {
            *vertex = *vertex + offset;
        }
    }

    fn transform_by(&mut self, matrix: &Matrix3) {
        for vertex in &mut self.vertices {
            *vertex = matrix * *vertex;
        }
    }

    fn entity_type(&self) -> &'static str {
        "POLYLINE"
    }
}

impl EntityClone for Polyline {
    fn create_instance() -> Self {
        Polyline::new()
    }

    fn copy_geometry_to(&self, target: &mut Self) {
        target.vertices.clear();
        target.vertices.extend_from_slice(&self.vertices);
        target.closed = self.closed;
    }
}
