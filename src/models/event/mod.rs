// Event module
// Scheduled event record as stored in the events table

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use super::color::EventColor;

/// Reasons an event cannot be written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event date is required")]
    MissingDate,
    #[error("Invalid event color: {0}")]
    InvalidColor(String),
}

/// A user-created event with a date, time-of-day and marker color.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Assigned by the store on insert
    pub id: Option<i64>,
    pub event_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub event_time: NaiveTime,
    pub event_color: EventColor,
}

impl Event {
    /// Create a new event with the required fields and the default color.
    ///
    /// # Examples
    /// ```
    /// use event_scheduler::models::event::Event;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let event = Event::new("Standup", date, time).unwrap();
    /// assert!(event.id.is_none());
    /// ```
    pub fn new(
        title: impl Into<String>,
        event_date: NaiveDate,
        event_time: NaiveTime,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id: None,
            event_date,
            title: title.into(),
            description: None,
            event_time,
            event_color: EventColor::default(),
        };
        event.validate()?;
        Ok(event)
    }

    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Description with empty text collapsed to `None`.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Time formatted the way it is stored (`HH:MM`).
    pub fn time_label(&self) -> String {
        self.event_time.format("%H:%M").to_string()
    }
}

/// Builder for events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    title: Option<String>,
    event_date: Option<NaiveDate>,
    description: Option<String>,
    event_time: Option<NaiveTime>,
    color: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.event_date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Defaults to midnight when not set
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.event_time = Some(time);
        self
    }

    /// Set the color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn build(self) -> Result<Event, EventValidationError> {
        let title = self.title.unwrap_or_default();
        let event_date = self.event_date.ok_or(EventValidationError::MissingDate)?;
        let event_color = match self.color {
            Some(hex) => EventColor::from_hex(&hex)
                .ok_or(EventValidationError::InvalidColor(hex))?,
            None => EventColor::default(),
        };

        let event = Event {
            id: None,
            event_date,
            title,
            description: self.description.filter(|d| !d.is_empty()),
            event_time: self.event_time.unwrap_or(NaiveTime::MIN),
            event_color,
        };

        event.validate()?;
        Ok(event)
    }
}
