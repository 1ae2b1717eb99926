//! Pages of the scheduler window.
//!
//! Each screen draws itself into the central panel and reports what the user
//! asked for as a [`ScreenAction`]; the app shell decides what happens next.

use chrono::NaiveDate;

use crate::services::event::EventManager;
use crate::ui_egui::theme::CalendarTheme;

pub mod event_form;
pub mod event_table;
pub mod home;

pub use event_form::{EventFormScreen, EventFormState, FormMode};
pub use event_table::{EventTableScreen, EventTableState, SortColumn};
pub use home::HomeScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Home,
    AddEvent,
    EditEvent,
    EventList,
}

impl ScreenId {
    pub fn label(&self) -> &'static str {
        match self {
            ScreenId::Home => "Calendar",
            ScreenId::AddEvent => "Add Event",
            ScreenId::EditEvent => "Edit Event",
            ScreenId::EventList => "All Events",
        }
    }
}

/// What a screen wants the shell to do after a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Navigate(ScreenId),
    /// Open the add form preset to this date
    AddEventForDate(NaiveDate),
    EventSaved { title: String, date: NaiveDate },
    EventUpdated { title: String },
    ValidationFailed,
    StoreFailed { message: String },
    /// Open the form in edit mode for this id
    EditRequested(i64),
    /// Cancel out of a form without saving
    Cancelled,
}

/// A page hosted by the app shell.
pub trait Screen {
    fn title(&self) -> String;

    fn show(
        &mut self,
        ui: &mut egui::Ui,
        manager: &EventManager,
        theme: &CalendarTheme,
    ) -> ScreenAction;

    /// Called when the shell switches to this screen.
    fn on_enter(&mut self, _manager: &EventManager) {}

    /// Called when the shell switches away from this screen.
    fn on_leave(&mut self) {}
}
