use chrono::{Local, NaiveDate};

use super::{Screen, ScreenAction};
use crate::services::event::EventManager;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{MonthView, MonthViewAction};

/// Calendar landing page.
pub struct HomeScreen {
    month_view: MonthView,
}

impl HomeScreen {
    pub fn new(first_day_of_week: u8) -> Self {
        Self::with_date(Local::now().date_naive(), first_day_of_week)
    }

    pub fn with_date(today: NaiveDate, first_day_of_week: u8) -> Self {
        Self {
            month_view: MonthView::new(today, first_day_of_week),
        }
    }

    pub fn month_view(&self) -> &MonthView {
        &self.month_view
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.month_view.selected_date()
    }

    pub fn previous_month(&mut self) {
        self.month_view.previous_month();
    }

    pub fn next_month(&mut self) {
        self.month_view.next_month();
    }

    pub fn jump_to_today(&mut self) {
        self.month_view.jump_to_today();
    }

    /// Mark the cached event dates stale; the next frame reloads them.
    pub fn invalidate(&mut self) {
        self.month_view.invalidate_event_dates();
    }
}

impl Screen for HomeScreen {
    fn title(&self) -> String {
        "Calendar".to_string()
    }

    fn show(
        &mut self,
        ui: &mut egui::Ui,
        manager: &EventManager,
        theme: &CalendarTheme,
    ) -> ScreenAction {
        match self.month_view.show(ui, manager, theme) {
            MonthViewAction::CreateEvent(date) => ScreenAction::AddEventForDate(date),
            MonthViewAction::DateSelected(_) | MonthViewAction::None => ScreenAction::None,
        }
    }

    fn on_enter(&mut self, manager: &EventManager) {
        self.month_view.refresh_event_dates(manager);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;
    use chrono::{Datelike, NaiveTime};

    #[test]
    fn test_on_enter_refreshes_dates() {
        let manager = EventManager::in_memory().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let event = Event::new("Dentist", day, NaiveTime::from_hms_opt(8, 30, 0).unwrap()).unwrap();
        assert!(manager.add(&event));

        let mut home = HomeScreen::with_date(day, 0);
        home.on_enter(&manager);
        assert_eq!(home.month_view().events_for_cell(&manager, day).len(), 1);
    }

    #[test]
    fn test_month_navigation_delegates() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let mut home = HomeScreen::with_date(day, 0);
        home.previous_month();
        assert_eq!(home.month_view().current_date().month(), 2);
        assert_eq!(home.month_view().current_date().day(), 29);
    }
}
