//! Event store access.
//! `EventManager` owns the SQLite connection and exposes CRUD over the events
//! table, organized across focused submodules.
//!
//! Every public operation reports failure as `false` / empty / `None` and
//! records a diagnostic retrievable with [`EventManager::last_error`]. The
//! `try_*` counterparts return the underlying `anyhow::Result`.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::Path;

use crate::models::event::Event;
use crate::services::database::Database;

pub mod crud;
pub mod queries;
mod shared;

/// Read access the calendar needs to draw markers.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    /// Dates that have at least one event
    fn event_dates(&self) -> HashSet<NaiveDate>;
    /// Events on `date` in store order
    fn events_on(&self, date: NaiveDate) -> Vec<Event>;
}

/// Owner of the events database connection.
pub struct EventManager {
    db: Option<Database>,
    db_path: String,
    last_error: RefCell<Option<String>>,
    last_insert_id: Cell<Option<i64>>,
}

impl EventManager {
    /// Open the database at `path` and make sure the events table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db_path = path.as_ref().to_string_lossy().to_string();
        let db = Database::new(&db_path)?;
        db.initialize_schema()?;
        log::info!("Database connection opened for {}", db_path);

        Ok(Self {
            db: Some(db),
            db_path,
            last_error: RefCell::new(None),
            last_insert_id: Cell::new(None),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    /// Close the connection. Later operations fail with "not connected".
    pub fn close(&mut self) {
        let Some(db) = self.db.take() else {
            return;
        };
        match db.close() {
            Ok(()) => log::info!("Database connection closed for {}", self.db_path),
            Err(e) => log::error!("{:#}", e),
        }
    }

    /// Diagnostic message of the most recent failed operation.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    /// Id assigned by the most recent successful [`EventManager::add`].
    pub fn last_insert_id(&self) -> Option<i64> {
        self.last_insert_id.get()
    }

    pub(crate) fn database(&self) -> Result<&Database> {
        self.db
            .as_ref()
            .ok_or_else(|| anyhow!("Database not connected ({})", self.db_path))
    }

    /// Log and remember an error, turning the result into an `Option`.
    fn report<T>(&self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error.replace(None);
                Some(value)
            }
            Err(e) => {
                let message = format!("{:#}", e);
                log::error!("{}", message);
                self.last_error.replace(Some(message));
                None
            }
        }
    }
}

impl EventSource for EventManager {
    fn event_dates(&self) -> HashSet<NaiveDate> {
        self.get_all_event_dates()
    }

    fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.get_by_date(date)
    }
}

impl Drop for EventManager {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::EventColor;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn standup() -> Event {
        Event::builder()
            .title("Standup")
            .date(date(2024, 1, 1))
            .time(time(9, 0))
            .color("#FF0000")
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_then_get_by_date() {
        let manager = EventManager::in_memory().unwrap();

        assert!(manager.add(&standup()));

        let events = manager.get_by_date(date(2024, 1, 1));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[0].event_time, time(9, 0));
        assert_eq!(events[0].event_color, EventColor::rgb(255, 0, 0));
        assert_eq!(events[0].id, manager.last_insert_id());
    }

    #[test]
    fn test_get_by_date_with_no_events_is_empty() {
        let manager = EventManager::in_memory().unwrap();
        manager.add(&standup());

        assert!(manager.get_by_date(date(2024, 1, 2)).is_empty());
        assert!(manager.last_error().is_none());
    }

    #[test]
    fn test_get_by_date_excludes_other_dates() {
        let manager = EventManager::in_memory().unwrap();
        for day in 1..=3 {
            let mut event = standup();
            event.event_date = date(2024, 1, day);
            event.title = format!("Day {}", day);
            assert!(manager.add(&event));
        }

        let events = manager.get_by_date(date(2024, 1, 2));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Day 2");
        assert!(events.iter().all(|e| e.event_date == date(2024, 1, 2)));
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let manager = EventManager::in_memory().unwrap();
        let mut event = standup();
        event.title = "  ".to_string();

        assert!(!manager.add(&event));
        assert!(manager.last_error().unwrap().contains("title"));
        assert!(manager.get_all().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let manager = EventManager::in_memory().unwrap();
        manager.add(&standup());
        let id = manager.last_insert_id().unwrap();

        let found = manager.get_by_id(id).unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.title, "Standup");
        assert!(manager.get_by_id(id + 100).is_none());
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let manager = EventManager::in_memory().unwrap();
        manager.add(&standup());
        let id = manager.last_insert_id().unwrap();

        let replacement = Event {
            id: Some(id),
            event_date: date(2024, 2, 29),
            title: "Retro".to_string(),
            description: Some("Sprint 4".to_string()),
            event_time: time(16, 30),
            event_color: EventColor::rgb(0, 128, 0),
        };
        assert!(manager.update(&replacement));

        assert_eq!(manager.get_by_id(id), Some(replacement));
        assert!(manager.get_by_date(date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_update_clears_description() {
        let manager = EventManager::in_memory().unwrap();
        let mut event = standup();
        event.description = Some("Daily sync".to_string());
        manager.add(&event);

        let mut stored = manager.get_all().remove(0);
        stored.description = None;
        assert!(manager.update(&stored));

        let reloaded = manager.get_by_id(stored.id.unwrap()).unwrap();
        assert_eq!(reloaded.description, None);
    }

    #[test]
    fn test_update_without_id_fails() {
        let manager = EventManager::in_memory().unwrap();
        assert!(!manager.update(&standup()));
        assert!(manager.last_error().unwrap().contains("ID"));
    }

    #[test]
    fn test_update_nonexistent_fails() {
        let manager = EventManager::in_memory().unwrap();
        let mut event = standup();
        event.id = Some(999);

        assert!(!manager.update(&event));
        assert!(manager.last_error().unwrap().contains("999"));
    }

    #[test]
    fn test_delete() {
        let manager = EventManager::in_memory().unwrap();
        manager.add(&standup());
        let id = manager.last_insert_id().unwrap();

        assert!(manager.delete(id));
        assert!(manager.get_by_id(id).is_none());
        assert!(manager.get_all().is_empty());
    }

    #[test]
    fn test_delete_nonexistent_fails() {
        let manager = EventManager::in_memory().unwrap();
        assert!(!manager.delete(42));
        assert!(manager.last_error().is_some());
    }

    #[test]
    fn test_successful_operation_clears_last_error() {
        let manager = EventManager::in_memory().unwrap();
        assert!(!manager.delete(42));
        assert!(manager.last_error().is_some());

        assert!(manager.add(&standup()));
        assert!(manager.last_error().is_none());
    }

    #[test]
    fn test_get_all_in_id_order() {
        let manager = EventManager::in_memory().unwrap();
        for title in ["First", "Second", "Third"] {
            let mut event = standup();
            event.title = title.to_string();
            manager.add(&event);
        }

        let titles: Vec<String> = manager.get_all().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_same_day_events_ordered_by_time() {
        let manager = EventManager::in_memory().unwrap();
        for (title, hour) in [("Lunch", 12), ("Breakfast", 8), ("Dinner", 19)] {
            let mut event = standup();
            event.title = title.to_string();
            event.event_time = time(hour, 0);
            manager.add(&event);
        }

        let titles: Vec<String> = manager
            .get_by_date(date(2024, 1, 1))
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Breakfast", "Lunch", "Dinner"]);
    }

    #[test]
    fn test_event_dates() {
        let manager = EventManager::in_memory().unwrap();
        for day in [3, 3, 7] {
            let mut event = standup();
            event.event_date = date(2024, 5, day);
            manager.add(&event);
        }

        let dates = manager.get_all_event_dates();
        assert_eq!(dates.len(), 2);
        assert!(dates.contains(&date(2024, 5, 3)));
        assert!(dates.contains(&date(2024, 5, 7)));
    }

    #[test]
    fn test_operations_after_close_fail() {
        let mut manager = EventManager::in_memory().unwrap();
        manager.add(&standup());
        manager.close();

        assert!(!manager.is_connected());
        assert!(!manager.add(&standup()));
        assert!(manager.last_error().unwrap().contains("not connected"));
        assert!(manager.get_all().is_empty());
        assert!(manager.get_by_id(1).is_none());
        assert!(!manager.delete(1));
    }

    #[test]
    fn test_close_twice_is_harmless() {
        let mut manager = EventManager::in_memory().unwrap();
        manager.close();
        manager.close();
        assert!(!manager.is_connected());
    }

    #[test]
    fn test_hostile_title_is_stored_verbatim() {
        let manager = EventManager::in_memory().unwrap();
        let mut event = standup();
        event.title = "x'); DROP TABLE events; --".to_string();

        assert!(manager.add(&event));
        assert_eq!(manager.get_all()[0].title, event.title);
    }

    fn insert_raw(manager: &EventManager, date: &str, title: &str, time: &str) {
        manager
            .database()
            .unwrap()
            .connection()
            .execute(
                "INSERT INTO events (event_date, title, event_time, event_color)
                 VALUES (?1, ?2, ?3, '#00FF00')",
                rusqlite::params![date, title, time],
            )
            .unwrap();
    }

    #[test]
    fn test_fractional_seconds_time_is_read() {
        let manager = EventManager::in_memory().unwrap();
        assert!(manager.add(&standup()));
        insert_raw(&manager, "2024-01-01", "Imported", "10:30:00.000");

        let titles: Vec<String> = manager
            .get_by_date(date(2024, 1, 1))
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Standup".to_string(), "Imported".to_string()]);
        assert_eq!(manager.get_all()[1].event_time, time(10, 30));
        assert_eq!(manager.last_error(), None);
    }

    #[test]
    fn test_unreadable_time_does_not_hide_other_rows() {
        let manager = EventManager::in_memory().unwrap();
        assert!(manager.add(&standup()));
        insert_raw(&manager, "2024-01-01", "Broken", "half past ten");

        let on_date = manager.get_by_date(date(2024, 1, 1));
        assert_eq!(on_date.len(), 2);
        assert_eq!(on_date[1].title, "Broken");
        assert_eq!(on_date[1].event_time, NaiveTime::MIN);
        assert_eq!(manager.get_all().len(), 2);
    }

    #[test]
    fn test_unreadable_date_row_is_skipped() {
        let manager = EventManager::in_memory().unwrap();
        assert!(manager.add(&standup()));
        insert_raw(&manager, "01/02/2024", "Misdated", "09:00");

        let all = manager.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Standup");
        assert_eq!(manager.event_dates().len(), 1);

        let misdated = all[0].id.unwrap() + 1;
        assert!(manager.try_get_by_id(misdated).is_err());
    }
}
