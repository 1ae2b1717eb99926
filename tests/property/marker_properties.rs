// Property-based tests for the calendar's event markers
// N events on a date always produce N markers, in order, without overlap

use chrono::{NaiveDate, NaiveTime};
use egui::{Pos2, Rect, Vec2};
use event_scheduler::models::event::Event;
use event_scheduler::services::event::EventManager;
use event_scheduler::ui_egui::views::markers::{
    marker_centers, visible_marker_count, MARKER_RADIUS, MARKER_SPACING,
};
use proptest::prelude::*;

fn cell(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_min_size(Pos2::new(x, y), Vec2::new(w, h))
}

proptest! {
    /// Property: one marker per event, never more, never fewer
    #[test]
    fn prop_marker_count_matches_event_count(
        count in 0usize..64,
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        w in 20.0f32..300.0,
        h in 20.0f32..200.0,
    ) {
        prop_assert_eq!(marker_centers(cell(x, y, w, h), count).len(), count);
    }

    /// Property: markers run left-to-right, share a baseline and never touch
    #[test]
    fn prop_markers_are_ordered_and_disjoint(
        count in 2usize..40,
        w in 20.0f32..300.0,
        h in 20.0f32..200.0,
    ) {
        let centers = marker_centers(cell(0.0, 0.0, w, h), count);
        for pair in centers.windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
            prop_assert!(pair[1].x - pair[0].x >= 2.0 * MARKER_RADIUS);
            prop_assert!((pair[1].x - pair[0].x - MARKER_SPACING).abs() < 1e-3);
            prop_assert_eq!(pair[0].y, pair[1].y);
        }
    }

    /// Property: markers sit inside the cell vertically
    #[test]
    fn prop_markers_stay_inside_cell_height(
        count in 1usize..20,
        y in -200.0f32..200.0,
        h in 20.0f32..200.0,
    ) {
        let rect = cell(0.0, y, 100.0, h);
        for center in marker_centers(rect, count) {
            prop_assert!(center.y + MARKER_RADIUS <= rect.bottom());
            prop_assert!(center.y - MARKER_RADIUS >= rect.top());
        }
    }

    /// Property: the visible markers are a prefix that fits inside the cell
    #[test]
    fn prop_visible_markers_fit(count in 0usize..64, w in 20.0f32..300.0) {
        let rect = cell(0.0, 0.0, w, 60.0);
        let visible = visible_marker_count(rect, count);
        prop_assert!(visible <= count);
        for center in marker_centers(rect, count).iter().take(visible) {
            prop_assert!(center.x + MARKER_RADIUS <= rect.right());
        }
    }

    /// Property: N stored events on a date give N markers for that date's cell
    #[test]
    fn prop_store_events_map_to_markers(
        minutes in proptest::collection::vec(0u32..1440, 0..12),
    ) {
        let manager = EventManager::in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        for (i, minute) in minutes.iter().enumerate() {
            let time = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap();
            let event = Event::new(format!("Event {}", i), date, time).unwrap();
            prop_assert!(manager.add(&event));
        }

        let on_date = manager.get_by_date(date);
        prop_assert_eq!(on_date.len(), minutes.len());
        prop_assert!(on_date.windows(2).all(|w| w[0].event_time <= w[1].event_time));

        let rect = cell(0.0, 0.0, 120.0, 80.0);
        prop_assert_eq!(marker_centers(rect, on_date.len()).len(), minutes.len());
    }
}
