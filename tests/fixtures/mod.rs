// Test fixtures - reusable test data
// Provides consistent events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use event_scheduler::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn jan_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// The standup example: 2024-01-01 09:00, red
    pub fn standup() -> Event {
        Event::builder()
            .title("Standup")
            .date(dates::jan_1_2024())
            .time(at(9, 0))
            .color("#FF0000")
            .build()
            .unwrap()
    }

    pub fn lunch() -> Event {
        Event::builder()
            .title("Lunch with Sam")
            .date(dates::jan_1_2024())
            .description("Usual place")
            .time(at(12, 30))
            .color("#10B981")
            .build()
            .unwrap()
    }

    pub fn leap_day_party() -> Event {
        Event::builder()
            .title("Leap day party")
            .date(dates::leap_day_2024())
            .time(at(19, 0))
            .build()
            .unwrap()
    }

    pub fn countdown() -> Event {
        Event::builder()
            .title("Countdown")
            .date(dates::new_years_eve_2025())
            .time(at(23, 59))
            .color("#8B5CF6")
            .build()
            .unwrap()
    }
}
