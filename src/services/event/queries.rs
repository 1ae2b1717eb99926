use super::shared::{date_to_sql, map_event_row, parse_sql_date, EVENT_COLUMNS};
use super::EventManager;
use crate::models::event::Event;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

impl EventManager {
    /// Events on `date`, earliest first. Empty when the date has none.
    pub fn get_by_date(&self, date: NaiveDate) -> Vec<Event> {
        self.report(self.try_get_by_date(date)).unwrap_or_default()
    }

    pub fn try_get_by_date(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let conn = self.database()?.connection();
        let mut stmt = conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE event_date = ?1
             ORDER BY event_time ASC, id ASC"
        ))?;

        let events = stmt
            .query_map([date_to_sql(date)], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("Failed to get events for {}", date))?
            .into_iter()
            .filter_map(|row| row.into_event())
            .collect();

        Ok(events)
    }

    /// Every stored event in id order.
    pub fn get_all(&self) -> Vec<Event> {
        self.report(self.try_get_all()).unwrap_or_default()
    }

    pub fn try_get_all(&self) -> Result<Vec<Event>> {
        let conn = self.database()?.connection();
        let mut stmt = conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY id ASC"
        ))?;

        let events = stmt
            .query_map([], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to get all events")?
            .into_iter()
            .filter_map(|row| row.into_event())
            .collect();

        Ok(events)
    }

    pub fn get_by_id(&self, id: i64) -> Option<Event> {
        self.report(self.try_get_by_id(id)).flatten()
    }

    pub fn try_get_by_id(&self, id: i64) -> Result<Option<Event>> {
        let conn = self.database()?.connection();
        let result = conn.query_row(
            &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1"),
            [id],
            map_event_row,
        );

        match result {
            Ok(row) => {
                let date = row.event_date().to_string();
                row.into_event()
                    .map(Some)
                    .ok_or_else(|| anyhow!("Event with ID {} has an invalid date '{}'", id, date))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(anyhow::Error::from(e).context(format!("Failed to get event with ID {}", id))),
        }
    }

    /// Distinct dates that have at least one event.
    pub fn get_all_event_dates(&self) -> HashSet<NaiveDate> {
        self.report(self.try_get_all_event_dates())
            .unwrap_or_default()
    }

    pub fn try_get_all_event_dates(&self) -> Result<HashSet<NaiveDate>> {
        let conn = self.database()?.connection();
        let mut stmt = conn.prepare("SELECT DISTINCT event_date FROM events")?;

        let raw_dates = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to get event dates")?;

        let dates = raw_dates
            .iter()
            .filter_map(|value| {
                let parsed = parse_sql_date(value);
                if parsed.is_none() {
                    log::warn!("Skipping unparsable event date '{}'", value);
                }
                parsed
            })
            .collect();

        Ok(dates)
    }
}
