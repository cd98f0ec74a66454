//! Shared builders for integration tests

#![allow(dead_code)]

use draftcore::{Color, EntityType, Handle, Line, Polyline, Vector2};

/// Open polyline through the given coordinates
pub fn polyline(coords: &[(f64, f64)]) -> Polyline {
    Polyline::from_points(coords.iter().map(|&(x, y)| Vector2::new(x, y)))
}

/// Closed polyline through the given coordinates
pub fn closed_polyline(coords: &[(f64, f64)]) -> Polyline {
    let mut p = polyline(coords);
    p.close();
    p
}

/// Closed axis-aligned rectangle with styled entity data
pub fn styled_rectangle(x: f64, y: f64, w: f64, h: f64) -> Polyline {
    let mut rect = closed_polyline(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)]);
    rect.common.handle = Handle::new(0x1F);
    rect.common.layer = "frames".to_string();
    rect.common.color = Color::CYAN;
    rect
}

/// A small mixed drawing, as a document would store it
pub fn sample_drawing() -> Vec<EntityType> {
    vec![
        styled_rectangle(0.0, 0.0, 10.0, 5.0).into(),
        polyline(&[(-2.0, 1.0), (3.0, 8.0), (6.0, 1.0)]).into(),
        Line::from_coords(12.0, -1.0, 14.0, 2.0).into(),
    ]
}
