use chrono::{NaiveDate, NaiveTime};
use rusqlite::{self, Row};

use crate::models::color::EventColor;
use crate::models::event::Event;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M";

pub(crate) const EVENT_COLUMNS: &str =
    "id, event_date, title, description, event_time, event_color";

pub(crate) fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn time_to_sql(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub(crate) fn parse_sql_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Accepts `HH:MM`, `HH:MM:SS` and `HH:MM:SS.fff`.
pub(crate) fn parse_sql_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S%.f"))
        .ok()
}

/// Raw text of a row selected with [`EVENT_COLUMNS`].
#[derive(Debug, Clone)]
pub(crate) struct EventRow {
    id: i64,
    event_date: String,
    title: String,
    description: Option<String>,
    event_time: Option<String>,
    event_color: Option<String>,
}

impl EventRow {
    pub(crate) fn event_date(&self) -> &str {
        &self.event_date
    }

    /// Build the event, or `None` when the stored date is unusable.
    ///
    /// An unreadable time reads as midnight and an unreadable color as the
    /// default color.
    pub(crate) fn into_event(self) -> Option<Event> {
        let Some(event_date) = parse_sql_date(&self.event_date) else {
            log::warn!(
                "Skipping event {} with unparsable date '{}'",
                self.id,
                self.event_date
            );
            return None;
        };

        let event_time = match self.event_time.as_deref() {
            None => NaiveTime::MIN,
            Some(value) => parse_sql_time(value).unwrap_or_else(|| {
                log::warn!(
                    "Event {} has unparsable time '{}', using 00:00",
                    self.id,
                    value
                );
                NaiveTime::MIN
            }),
        };

        let event_color = self
            .event_color
            .as_deref()
            .and_then(EventColor::from_hex)
            .unwrap_or_default();

        Some(Event {
            id: Some(self.id),
            event_date,
            title: self.title,
            description: self.description,
            event_time,
            event_color,
        })
    }
}

pub(crate) fn map_event_row(row: &Row<'_>) -> Result<EventRow, rusqlite::Error> {
    Ok(EventRow {
        id: row.get(0)?,
        event_date: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        event_time: row.get(4)?,
        event_color: row.get(5)?,
    })
}
