use super::shared::{date_to_sql, time_to_sql};
use super::EventManager;
use crate::models::event::Event;
use anyhow::{anyhow, Context, Result};
use rusqlite::params;

impl EventManager {
    /// Insert a new event. The store assigns the id.
    pub fn add(&self, event: &Event) -> bool {
        match self.report(self.try_add(event)) {
            Some(id) => {
                self.last_insert_id.set(Some(id));
                log::info!(
                    "Event added for {}: {} (ID: {})",
                    event.event_date,
                    event.title,
                    id
                );
                true
            }
            None => false,
        }
    }

    pub fn try_add(&self, event: &Event) -> Result<i64> {
        event.validate()?;
        let conn = self.database()?.connection();

        conn.execute(
            "INSERT INTO events (event_date, title, description, event_time, event_color)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                date_to_sql(event.event_date),
                event.title,
                event.description_text(),
                time_to_sql(event.event_time),
                event.event_color.to_hex(),
            ],
        )
        .context("Failed to add event")?;

        Ok(conn.last_insert_rowid())
    }

    /// Overwrite every field of the stored row with the same id.
    pub fn update(&self, event: &Event) -> bool {
        let updated = self.report(self.try_update(event)).is_some();
        if updated {
            log::info!("Event updated: {} (ID: {:?})", event.title, event.id);
        }
        updated
    }

    pub fn try_update(&self, event: &Event) -> Result<()> {
        let id = event
            .id
            .ok_or_else(|| anyhow!("Event ID is required for update"))?;
        event.validate()?;

        let rows_affected = self
            .database()?
            .connection()
            .execute(
                "UPDATE events SET
                    event_date = ?1, title = ?2, description = ?3,
                    event_time = ?4, event_color = ?5
                 WHERE id = ?6",
                params![
                    date_to_sql(event.event_date),
                    event.title,
                    event.description_text(),
                    time_to_sql(event.event_time),
                    event.event_color.to_hex(),
                    id,
                ],
            )
            .context("Failed to update event")?;

        if rows_affected == 0 {
            return Err(anyhow!("Event with id {} not found", id));
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> bool {
        let deleted = self.report(self.try_delete(id)).is_some();
        if deleted {
            log::info!("Event with ID {} deleted", id);
        }
        deleted
    }

    pub fn try_delete(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .database()?
            .connection()
            .execute("DELETE FROM events WHERE id = ?1", [id])
            .with_context(|| format!("Failed to delete event with ID {}", id))?;

        if rows_affected == 0 {
            return Err(anyhow!("Event with id {} not found", id));
        }

        Ok(())
    }
}
