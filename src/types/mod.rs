//! Geometry value types and entity style types

pub mod bounds;
pub mod color;
pub mod handle;
pub mod line_weight;
pub mod transform;
pub mod vector;

pub use bounds::BoundingBox2D;
pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use transform::Matrix3;
pub use vector::Vector2;
