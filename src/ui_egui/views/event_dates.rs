//! Cached set of dates that have at least one event.
//!
//! The calendar checks this set for every visible cell and only queries the
//! store for dates it contains. The set is refreshed on demand after the
//! store changes, not live.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::services::event::EventSource;

#[derive(Debug)]
pub struct EventDateCache {
    dates: HashSet<NaiveDate>,
    stale: bool,
}

impl EventDateCache {
    /// A cache that loads on first use.
    pub fn new() -> Self {
        Self {
            dates: HashSet::new(),
            stale: true,
        }
    }

    pub fn refresh(&mut self, source: &dyn EventSource) {
        self.dates = source.event_dates();
        self.stale = false;
        log::debug!("Event date cache refreshed: {} dates", self.dates.len());
    }

    /// Mark the cache so the next [`EventDateCache::ensure_fresh`] reloads it.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn ensure_fresh(&mut self, source: &dyn EventSource) {
        if self.stale {
            self.refresh(source);
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl Default for EventDateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::event::MockEventSource;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_new_cache_loads_once() {
        let mut source = MockEventSource::new();
        source
            .expect_event_dates()
            .times(1)
            .returning(|| [date(3), date(9)].into_iter().collect());

        let mut cache = EventDateCache::new();
        cache.ensure_fresh(&source);
        cache.ensure_fresh(&source);

        assert!(cache.contains(date(3)));
        assert!(cache.contains(date(9)));
        assert!(!cache.contains(date(4)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let mut source = MockEventSource::new();
        let mut calls = 0;
        source.expect_event_dates().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                HashSet::new()
            } else {
                [date(1)].into_iter().collect()
            }
        });

        let mut cache = EventDateCache::new();
        cache.ensure_fresh(&source);
        assert!(cache.is_empty());

        cache.invalidate();
        cache.ensure_fresh(&source);
        assert!(cache.contains(date(1)));
    }

    #[test]
    fn test_cache_is_not_live() {
        let mut source = MockEventSource::new();
        source
            .expect_event_dates()
            .times(1)
            .returning(|| [date(2)].into_iter().collect());

        let mut cache = EventDateCache::new();
        cache.ensure_fresh(&source);
        // Without invalidate the source is never consulted again
        assert!(cache.contains(date(2)));
        assert!(!cache.contains(date(5)));
    }
}
