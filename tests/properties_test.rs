//! Property tests for frame drawing and obstacle geometry.

use proptest::prelude::*;

use space_garbage::core::{Frame, ObstacleRegistry};
use space_garbage::term::FrameBuffer;

fn sprite_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[#a-z ]{0,8}", 1..6).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn draw_then_erase_leaves_blank_grid(
        text in sprite_text(),
        row in -8.0f64..30.0,
        col in -10.0f64..40.0,
    ) {
        let frame = Frame::new(&text);
        let mut fb = FrameBuffer::new(30, 20);
        frame.draw(&mut fb, row, col);
        frame.erase(&mut fb, row, col);
        for y in 0..20 {
            let row_text = fb.row_text(y);
            prop_assert_eq!(row_text.trim(), "");
        }
    }

    #[test]
    fn draw_never_touches_bottom_right_cell(
        row in -3.0f64..3.0,
        col in -3.0f64..3.0,
    ) {
        let line = "#".repeat(40);
        let text = vec![line.as_str(); 30].join("\n");
        let frame = Frame::new(&text);
        let mut fb = FrameBuffer::new(20, 10);
        frame.draw(&mut fb, row, col);
        prop_assert_eq!(fb.get(19, 9).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn obstacle_box_is_half_open(
        row in -20i32..20,
        col in -20i32..20,
        rows in 1usize..6,
        columns in 1usize..6,
        dr in -3i32..9,
        dc in -3i32..9,
    ) {
        let registry = ObstacleRegistry::new();
        let guard = registry.insert(f64::from(row), f64::from(col), rows, columns);

        let inside = dr >= 0 && (dr as usize) < rows && dc >= 0 && (dc as usize) < columns;
        let found = registry.contains_point(f64::from(row + dr), f64::from(col + dc));
        prop_assert_eq!(found, if inside { Some(guard.id()) } else { None });
    }

    #[test]
    fn dropped_guards_leave_no_obstacles(count in 0usize..20, keep in 0usize..20) {
        let registry = ObstacleRegistry::new();
        let mut guards: Vec<_> = (0..count)
            .map(|i| registry.insert(i as f64, 0.0, 1, 1))
            .collect();
        guards.truncate(keep);
        prop_assert_eq!(registry.len(), count.min(keep));
        drop(guards);
        prop_assert!(registry.is_empty());
    }
}
