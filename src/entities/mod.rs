//! CAD entity types and traits

use crate::draw::DrawSurface;
use crate::types::{BoundingBox2D, Color, Handle, LineWeight, Matrix3, Vector2};
use tracing::trace;

pub mod line;
pub mod polyline;

pub use line::Line;
pub use polyline::Polyline;

/// Base trait for all drawable entities
///
/// Identity and style accessors are provided on top of [`EntityCommon`];
/// each entity kind supplies its own geometry operations.
pub trait Entity {
    /// Shared entity-level data
    fn common(&self) -> &EntityCommon;

    /// Mutable shared entity-level data
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// Get the entity's handle
    fn handle(&self) -> Handle {
        self.common().handle
    }

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle) {
        self.common_mut().handle = handle;
    }

    /// Get the entity's layer name
    fn layer(&self) -> &str {
        &self.common().layer
    }

    /// Set the entity's layer name
    fn set_layer(&mut self, layer: String) {
        self.common_mut().layer = layer;
    }

    fn color(&self) -> Color {
        self.common().color
    }

    fn set_color(&mut self, color: Color) {
        self.common_mut().color = color;
    }

    fn line_weight(&self) -> LineWeight {
        self.common().line_weight
    }

    fn set_line_weight(&mut self, weight: LineWeight) {
        self.common_mut().line_weight = weight;
    }

    fn is_invisible(&self) -> bool {
        self.common().invisible
    }

    fn set_invisible(&mut self, invisible: bool) {
        self.common_mut().invisible = invisible;
    }

    /// Issue the entity's line segments to `surface`, in a fixed order
    fn draw(&self, surface: &mut dyn DrawSurface);

    /// Axis-aligned bounding box of the current geometry
    fn bounding_box(&self) -> BoundingBox2D;

    /// Move the entity by a translation vector
    fn translate(&mut self, offset: Vector2);

    /// Apply a general transform matrix to every defining point
    fn transform_by(&mut self, matrix: &Matrix3);

    /// Get the entity type name
    fn entity_type(&self) -> &'static str;

    /// Rotate counter-clockwise around `center` (radians)
    fn apply_rotation(&mut self, center: Vector2, angle: f64) {
        self.transform_by(&Matrix3::rotation_about(center, angle));
    }

    /// Uniform scaling with `origin` as the fixed point
    fn apply_scaling(&mut self, scale: f64, origin: Vector2) {
        self.transform_by(&Matrix3::scaling_about(scale, scale, origin));
    }
}

/// Duplication protocol for entities
///
/// Cloning runs in two explicit steps: a fresh instance is created and
/// receives the entity-level data ([`EntityCommon::copy_to`]), then the
/// entity kind copies its own geometry on top ([`copy_geometry_to`]).
///
/// [`copy_geometry_to`]: EntityClone::copy_geometry_to
pub trait EntityClone: Entity + Sized {
    /// A new, empty instance of this entity kind
    fn create_instance() -> Self;

    /// Copy the kind-specific fields into `target`
    fn copy_geometry_to(&self, target: &mut Self);

    /// Deep, independent copy of this entity
    fn clone_entity(&self) -> Self {
        let mut copy = Self::create_instance();
        self.common().copy_to(copy.common_mut());
        self.copy_geometry_to(&mut copy);

        trace!(entity = self.entity_type(), handle = %self.handle(), "cloned entity");
        copy
    }
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Document handle, NULL until the entity is owned by a document
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    pub color: Color,
    pub line_weight: LineWeight,
    /// Visibility flag
    pub invisible: bool,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
            color: Color::ByLayer,
            line_weight: LineWeight::ByLayer,
            invisible: false,
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }

    /// Base step of the clone protocol: copy identity and style onto `target`
    pub fn copy_to(&self, target: &mut EntityCommon) {
        target.clone_from(self);
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of all entity kinds for type-safe storage
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    /// Open or closed chain of 2D vertices
    Polyline(Polyline),
    /// Single straight segment
    Line(Line),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Polyline(e) => e,
            EntityType::Line(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Polyline(e) => e,
            EntityType::Line(e) => e,
        }
    }

    /// Clone through each kind's clone protocol
    pub fn clone_entity(&self) -> EntityType {
        match self {
            EntityType::Polyline(e) => EntityType::Polyline(e.clone_entity()),
            EntityType::Line(e) => EntityType::Line(e.clone_entity()),
        }
    }

    /// Fresh, empty entity of the same kind
    pub fn create_instance(&self) -> EntityType {
        match self {
            EntityType::Polyline(_) => EntityType::Polyline(Polyline::create_instance()),
            EntityType::Line(_) => EntityType::Line(Line::create_instance()),
        }
    }

    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            EntityType::Polyline(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polyline_mut(&mut self) -> Option<&mut Polyline> {
        match self {
            EntityType::Polyline(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Polyline> for EntityType {
    fn from(value: Polyline) -> Self {
        EntityType::Polyline(value)
    }
}

impl From<Line> for EntityType {
    fn from(value: Line) -> Self {
        EntityType::Line(value)
    }
}
