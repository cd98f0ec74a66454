//! Property tests for polyline invariants

use draftcore::{Entity, EntityClone, Matrix3, Polyline, SegmentRecorder, Vector2};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn point() -> impl Strategy<Value = Vector2> {
    (coord(), coord()).prop_map(|(x, y)| Vector2::new(x, y))
}

fn polyline_strategy(max_len: usize) -> impl Strategy<Value = Polyline> {
    (prop::collection::vec(point(), 0..max_len), any::<bool>()).prop_map(|(points, closed)| {
        let mut p = Polyline::from_points(points);
        p.set_closed(closed);
        p
    })
}

fn polyline_with_insert_index() -> impl Strategy<Value = (Polyline, usize)> {
    polyline_strategy(12).prop_flat_map(|p| {
        let len = p.number_of_vertices();
        (Just(p), 0..=len)
    })
}

proptest! {
    #[test]
    fn insert_then_remove_restores_sequence(
        (p, index) in polyline_with_insert_index(),
        extra in point(),
    ) {
        let mut edited = p.clone();
        edited.add_vertex_at(index, extra).unwrap();
        prop_assert_eq!(edited.point_at(index), Ok(extra));
        prop_assert_eq!(edited.remove_vertex_at(index), Ok(extra));
        prop_assert_eq!(edited, p);
    }

    #[test]
    fn bounding_box_contains_every_vertex(p in polyline_strategy(16)) {
        let bbox = p.bounding_box();
        prop_assert_eq!(bbox.is_empty(), p.is_empty());
        for vertex in p.vertices() {
            prop_assert!(bbox.contains(*vertex));
        }
    }

    #[test]
    fn draw_emits_expected_segment_count(p in polyline_strategy(16)) {
        let n = p.number_of_vertices();
        let expected = match n {
            0 | 1 => 0,
            2 => 1,
            _ if p.is_closed() => n,
            _ => n - 1,
        };
        let mut surface = SegmentRecorder::new();
        p.draw(&mut surface);
        prop_assert_eq!(surface.len(), expected);
    }

    #[test]
    fn translate_preserves_shape(p in polyline_strategy(16), offset in point()) {
        let mut moved = p.clone();
        moved.translate(offset);
        prop_assert_eq!(moved.number_of_vertices(), p.number_of_vertices());
        prop_assert_eq!(moved.is_closed(), p.is_closed());
        for (a, b) in moved.vertices().iter().zip(p.vertices()) {
            prop_assert_eq!(*a, *b + offset);
        }
    }

    #[test]
    fn identity_transform_is_exact(p in polyline_strategy(16)) {
        let mut transformed = p.clone();
        transformed.transform_by(&Matrix3::identity());
        prop_assert_eq!(transformed, p);
    }

    #[test]
    fn clone_is_independent(p in polyline_strategy(8), replacement in point()) {
        prop_assume!(!p.is_empty());
        let mut copy = p.clone_entity();
        prop_assert_eq!(&copy, &p);

        let before = p.point_at(0);
        copy.set_point_at(0, replacement).unwrap();
        prop_assert_eq!(p.point_at(0), before);
    }
}
