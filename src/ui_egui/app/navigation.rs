use super::confirm::ConfirmAction;
use super::SchedulerApp;
use crate::ui_egui::screens::{Screen, ScreenAction, ScreenId};

const MISSING_FIELDS: &str = "You are missing one or more of the required fields";

impl SchedulerApp {
    pub(super) fn current_screen(&self) -> ScreenId {
        self.state.current_screen
    }

    /// Switch screens, running the leave/enter hooks of both.
    pub(super) fn navigate_to(&mut self, target: ScreenId) {
        let current = self.state.current_screen;
        if current == target {
            return;
        }

        match current {
            ScreenId::Home => self.home.on_leave(),
            ScreenId::AddEvent => self.add_form.on_leave(),
            ScreenId::EditEvent => self.edit_form.on_leave(),
            ScreenId::EventList => self.table.on_leave(),
        }

        let manager = self.context.manager();
        match target {
            ScreenId::Home => self.home.on_enter(manager),
            ScreenId::AddEvent => self.add_form.on_enter(manager),
            ScreenId::EditEvent => self.edit_form.on_enter(manager),
            ScreenId::EventList => self.table.on_enter(manager),
        }

        log::debug!("Screen changed: {:?} -> {:?}", current, target);
        self.state.current_screen = target;
    }

    pub(super) fn show_current_screen(&mut self, ui: &mut egui::Ui) -> ScreenAction {
        let manager = self.context.manager();
        let theme = &self.active_theme;
        match self.state.current_screen {
            ScreenId::Home => self.home.show(ui, manager, theme),
            ScreenId::AddEvent => self.add_form.show(ui, manager, theme),
            ScreenId::EditEvent => self.edit_form.show(ui, manager, theme),
            ScreenId::EventList => self.table.show(ui, manager, theme),
        }
    }

    /// Reload everything that mirrors the store.
    pub(super) fn refresh_data(&mut self) {
        self.home.invalidate();
        self.table.reload(self.context.manager());
    }

    pub(super) fn handle_screen_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(target) => self.navigate_to(target),
            ScreenAction::AddEventForDate(date) => self.open_add_form(Some(date)),
            ScreenAction::EventSaved { title, date } => {
                self.message_dialog.info(
                    "Event Added",
                    format!(
                        "Event \"{}\" was added for {}.",
                        title,
                        date.format("%Y-%m-%d")
                    ),
                );
                self.refresh_data();
                self.navigate_to(ScreenId::Home);
            }
            ScreenAction::EventUpdated { title } => {
                self.toast_manager.success(format!("Updated \"{}\"", title));
                self.refresh_data();
                self.navigate_to(ScreenId::EventList);
            }
            ScreenAction::ValidationFailed => {
                self.message_dialog.warning("Missing Fields", MISSING_FIELDS);
            }
            ScreenAction::StoreFailed { message } => {
                self.message_dialog.error("Database Error", message);
            }
            ScreenAction::EditRequested(id) => self.begin_edit(id),
            ScreenAction::Cancelled => {
                let back = if self.current_screen() == ScreenId::EditEvent {
                    ScreenId::EventList
                } else {
                    ScreenId::Home
                };
                self.navigate_to(back);
            }
        }
    }

    /// Show a blank add form, even when it is already the current screen.
    pub(super) fn open_add_form(&mut self, date: Option<chrono::NaiveDate>) {
        if self.current_screen() == ScreenId::AddEvent {
            self.add_form.reset();
        }
        self.navigate_to(ScreenId::AddEvent);
        if let Some(date) = date {
            self.add_form.preset_date(date);
        }
    }

    fn begin_edit(&mut self, id: i64) {
        let loaded = self
            .context
            .manager()
            .get_by_id(id)
            .map(|event| self.edit_form.load_event(&event))
            .unwrap_or(false);

        if loaded {
            self.navigate_to(ScreenId::EditEvent);
            return;
        }

        let reason = self
            .context
            .manager()
            .last_error()
            .unwrap_or_else(|| format!("Event with id {} no longer exists", id));
        self.message_dialog.error("Edit Failed", reason);
        self.refresh_data();
    }

    /// Toolbar/menu "Edit Event": only valid with a table selection.
    pub(super) fn edit_selected(&mut self) {
        if self.current_screen() != ScreenId::EventList {
            self.message_dialog.warning(
                "Edit Event",
                "Events are edited from the event viewer page.\nOpen View All Events and select the event to edit.",
            );
            return;
        }
        match self.table.selected_event().and_then(|e| e.id) {
            Some(id) => self.begin_edit(id),
            None => self
                .message_dialog
                .warning("Edit Event", "Select an event in the table first."),
        }
    }

    /// Toolbar/menu "Delete Event": asks for confirmation of the table selection.
    pub(super) fn delete_selected(&mut self) {
        if self.current_screen() != ScreenId::EventList {
            self.message_dialog.warning(
                "Delete Event",
                "Events are deleted from the event viewer page.\nOpen View All Events and select the event to delete.",
            );
            return;
        }

        let request = self.table.selected_event().and_then(|event| {
            Some(ConfirmAction::DeleteEvent {
                event_id: event.id?,
                title: event.title.clone(),
                date: event.event_date,
            })
        });

        match request {
            Some(action) => self.confirm_dialog.request(action),
            None => self
                .message_dialog
                .warning("Delete Event", "Select an event in the table first."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::event::Event;
    use crate::services::event::EventManager;
    use crate::ui_egui::theme::CalendarTheme;
    use chrono::{NaiveDate, NaiveTime};

    fn app_with(events: &[&str]) -> SchedulerApp {
        let manager = EventManager::in_memory().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for title in events {
            let event = Event::new(*title, day, NaiveTime::from_hms_opt(9, 0, 0).unwrap()).unwrap();
            assert!(manager.add(&event));
        }
        SchedulerApp::with_parts(manager, AppConfig::default(), CalendarTheme::light())
    }

    #[test]
    fn test_leaving_add_form_resets_it() {
        let mut app = app_with(&[]);
        app.open_add_form(None);
        app.add_form.state_mut().title = "Draft".to_string();

        app.navigate_to(ScreenId::EventList);
        assert!(app.add_form.state().title.is_empty());
    }

    #[test]
    fn test_reopening_add_form_clears_draft() {
        let mut app = app_with(&[]);
        app.open_add_form(None);
        app.add_form.state_mut().title = "Draft".to_string();

        app.open_add_form(None);
        assert_eq!(app.current_screen(), ScreenId::AddEvent);
        assert!(app.add_form.state().title.is_empty());
    }

    #[test]
    fn test_add_for_date_presets_form() {
        let mut app = app_with(&[]);
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        app.handle_screen_action(ScreenAction::AddEventForDate(date));

        assert_eq!(app.current_screen(), ScreenId::AddEvent);
        assert_eq!(app.add_form.state().date, date);
    }

    #[test]
    fn test_delete_outside_table_warns() {
        let mut app = app_with(&["Standup"]);
        app.delete_selected();
        assert!(app.message_dialog.is_open());
        assert!(!app.confirm_dialog.is_open());
    }

    #[test]
    fn test_delete_selected_requests_confirmation() {
        let mut app = app_with(&["Standup"]);
        app.navigate_to(ScreenId::EventList);
        let id = app.table.state().rows()[0].id;
        app.table.select(id);

        app.delete_selected();
        assert!(app.confirm_dialog.is_open());
        assert!(!app.message_dialog.is_open());
    }

    #[test]
    fn test_validation_failure_shows_warning() {
        let mut app = app_with(&[]);
        app.handle_screen_action(ScreenAction::ValidationFailed);
        let message = app.message_dialog.current().unwrap();
        assert_eq!(message.body, MISSING_FIELDS);
    }

    #[test]
    fn test_saved_event_returns_home() {
        let mut app = app_with(&[]);
        app.open_add_form(None);
        app.handle_screen_action(ScreenAction::EventSaved {
            title: "Standup".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        });
        assert_eq!(app.current_screen(), ScreenId::Home);
        assert!(app.message_dialog.current().unwrap().body.contains("Standup"));
    }

    #[test]
    fn test_edit_request_loads_form() {
        let mut app = app_with(&["Standup"]);
        app.navigate_to(ScreenId::EventList);
        let id = app.table.state().rows()[0].id.unwrap();

        app.handle_screen_action(ScreenAction::EditRequested(id));
        assert_eq!(app.current_screen(), ScreenId::EditEvent);
        assert_eq!(app.edit_form.state().title, "Standup");
    }
}
