//! Event markers drawn along the bottom edge of a day cell.
//!
//! One filled circle per event, left-to-right in store order, tinted with
//! the event's color.

use egui::{Painter, Pos2, Rect};

use crate::models::event::Event;
use crate::ui_egui::theme::event_color32;

pub const MARKER_RADIUS: f32 = 3.0;
/// Distance between neighbouring marker centers
pub const MARKER_SPACING: f32 = 7.0;
/// Horizontal offset of the first center from the cell's left edge
pub const MARKER_INSET: f32 = 5.0;
/// Gap between a marker's lowest point and the cell's bottom edge
pub const MARKER_BOTTOM_GAP: f32 = 2.0;

/// Centers for `count` markers in `cell`. Always returns exactly `count`
/// points; markers past the right edge are clipped when painted.
pub fn marker_centers(cell: Rect, count: usize) -> Vec<Pos2> {
    let y = cell.bottom() - MARKER_RADIUS - MARKER_BOTTOM_GAP;
    (0..count)
        .map(|i| Pos2::new(cell.left() + MARKER_INSET + i as f32 * MARKER_SPACING, y))
        .collect()
}

/// How many markers fit inside the cell without clipping.
pub fn visible_marker_count(cell: Rect, count: usize) -> usize {
    marker_centers(cell, count)
        .iter()
        .take_while(|center| center.x + MARKER_RADIUS <= cell.right())
        .count()
}

pub fn paint_markers(painter: &Painter, cell: Rect, events: &[Event]) {
    let painter = painter.with_clip_rect(cell);
    for (center, event) in marker_centers(cell, events.len()).into_iter().zip(events) {
        painter.circle_filled(center, MARKER_RADIUS, event_color32(event.event_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    fn cell() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(80.0, 60.0))
    }

    #[test]
    fn test_no_events_no_markers() {
        assert!(marker_centers(cell(), 0).is_empty());
    }

    #[test]
    fn test_first_marker_position() {
        let centers = marker_centers(cell(), 1);
        assert_eq!(centers, vec![Pos2::new(105.0, 105.0)]);
    }

    #[test]
    fn test_markers_run_left_to_right() {
        let centers = marker_centers(cell(), 3);
        let xs: Vec<f32> = centers.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![105.0, 112.0, 119.0]);
        assert!(centers.iter().all(|c| c.y == 105.0));
    }

    #[test]
    fn test_markers_do_not_overlap() {
        let centers = marker_centers(cell(), 5);
        for pair in centers.windows(2) {
            assert!(pair[1].x - pair[0].x >= 2.0 * MARKER_RADIUS);
        }
    }

    #[test]
    fn test_visible_marker_count() {
        // Last center that fits: 100 + 5 + i*7 + 3 <= 180  =>  i <= 10
        assert_eq!(visible_marker_count(cell(), 4), 4);
        assert_eq!(visible_marker_count(cell(), 20), 11);
    }
}
