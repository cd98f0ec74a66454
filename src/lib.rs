//! # draftcore
//!
//! Drawable 2D entities for CAD-style documents.
//!
//! The centerpiece is [`Polyline`], an ordered and optionally closed chain of
//! 2D vertices that supports vertex editing, bounding-box queries, translation,
//! general matrix transforms, rendering through a [`DrawSurface`], and deep
//! duplication.
//!
//! ## Quick Start
//!
//! ```rust
//! use draftcore::{Entity, Polyline, SegmentRecorder, Vector2};
//!
//! let mut outline = Polyline::new();
//! outline.add_vertex_at(0, Vector2::new(0.0, 0.0))?;
//! outline.add_vertex_at(1, Vector2::new(4.0, 0.0))?;
//! outline.add_vertex_at(2, Vector2::new(4.0, 3.0))?;
//! outline.close();
//!
//! let mut surface = SegmentRecorder::new();
//! outline.draw(&mut surface);
//! assert_eq!(surface.len(), 3);
//!
//! let bbox = outline.bounding_box();
//! assert_eq!(bbox.max, Vector2::new(4.0, 3.0));
//! # Ok::<(), draftcore::DraftError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Entity` - Trait for drawable, transformable entities
//! - `EntityClone` - Two-step duplication protocol
//! - `EntityType` - Tagged storage of every entity kind
//! - `DrawSurface` - Rendering capability entities draw onto
//!
//! Entity operations are synchronous and hold no external resources. Logging
//! goes through `tracing`; installing a subscriber is left to the application.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod draw;
pub mod entities;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use draw::{DrawSurface, SegmentRecorder};
pub use entities::{Entity, EntityClone, EntityCommon, EntityType, Line, Polyline};
pub use error::{DraftError, Result};
pub use types::{BoundingBox2D, Color, Handle, LineWeight, Matrix3, Vector2};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
