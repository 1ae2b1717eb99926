use chrono::{Datelike, Local, NaiveDate};
use egui::{Sense, Vec2};

use super::event_dates::EventDateCache;
use super::palette::CalendarCellPalette;
use crate::models::event::Event;
use crate::services::event::EventSource;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{
    days_in_month, first_of_month, is_weekend, leading_blank_days, shift_month_preserving_day,
    weekday_names, weeks_in_grid,
};

const CELL_SPACING: f32 = 2.0;
const HEADER_HEIGHT: f32 = 24.0;
const MIN_CELL_HEIGHT: f32 = 56.0;

/// Action returned from month view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthViewAction {
    None,
    /// A day cell was clicked
    DateSelected(NaiveDate),
    /// A day cell was double-clicked; open the add form for that date
    CreateEvent(NaiveDate),
}

/// Month grid with one marker per event in each day cell.
pub struct MonthView {
    /// Any date inside the month being shown
    current_date: NaiveDate,
    selected_date: Option<NaiveDate>,
    first_day_of_week: u8,
    date_cache: EventDateCache,
}

impl MonthView {
    pub fn new(today: NaiveDate, first_day_of_week: u8) -> Self {
        Self {
            current_date: today,
            selected_date: Some(today),
            first_day_of_week: first_day_of_week % 7,
            date_cache: EventDateCache::new(),
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn previous_month(&mut self) {
        self.current_date = shift_month_preserving_day(self.current_date, -1);
    }

    pub fn next_month(&mut self) {
        self.current_date = shift_month_preserving_day(self.current_date, 1);
    }

    pub fn jump_to_today(&mut self) {
        let today = Local::now().date_naive();
        self.current_date = today;
        self.selected_date = Some(today);
    }

    /// Reload the set of dates that have events.
    pub fn refresh_event_dates(&mut self, source: &dyn EventSource) {
        self.date_cache.refresh(source);
    }

    pub fn invalidate_event_dates(&mut self) {
        self.date_cache.invalidate();
    }

    /// Events to mark on `date`; the store is only queried for cached dates.
    pub fn events_for_cell(&self, source: &dyn EventSource, date: NaiveDate) -> Vec<Event> {
        if self.date_cache.contains(date) {
            source.events_on(date)
        } else {
            Vec::new()
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        source: &dyn EventSource,
        theme: &CalendarTheme,
    ) -> MonthViewAction {
        self.date_cache.ensure_fresh(source);

        self.render_navigation(ui);
        ui.add_space(6.0);
        let mut action = MonthViewAction::None;

        let palette = CalendarCellPalette::from_theme(theme);
        let col_width = (ui.available_width() - CELL_SPACING * 6.0) / 7.0;

        egui::Grid::new("month_header_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for day in weekday_names(self.first_day_of_week) {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            ui.label(
                                egui::RichText::new(day)
                                    .size(13.0)
                                    .color(palette.header_text)
                                    .strong(),
                            );
                        },
                    );
                }
            });

        let month_start = first_of_month(self.current_date);
        let blanks = leading_blank_days(month_start, self.first_day_of_week) as i32;
        let month_days = days_in_month(month_start.year(), month_start.month()) as i32;
        let rows = weeks_in_grid(month_start, self.first_day_of_week);
        let cell_height = ((ui.available_height() - CELL_SPACING * rows as f32) / rows as f32)
            .max(MIN_CELL_HEIGHT);
        let cell_size = Vec2::new(col_width, cell_height);
        let today = Local::now().date_naive();

        let mut day_counter = 1 - blanks;
        egui::Grid::new("month_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for _week_row in 0..rows {
                    for _day_of_week in 0..7 {
                        if day_counter < 1 || day_counter > month_days {
                            // Empty cell for days outside current month
                            let (rect, _) = ui.allocate_exact_size(cell_size, Sense::hover());
                            ui.painter().rect_filled(rect, 2.0, palette.empty_bg);
                        } else if let Some(date) = month_start.with_day(day_counter as u32) {
                            let events = self.events_for_cell(source, date);
                            let cell = Self::render_day_cell(
                                ui,
                                date,
                                date == today,
                                self.selected_date == Some(date),
                                is_weekend(date),
                                &events,
                                palette,
                                cell_size,
                            );

                            if cell.double_clicked {
                                action = MonthViewAction::CreateEvent(date);
                            } else if cell.clicked {
                                action = MonthViewAction::DateSelected(date);
                            }
                        }
                        day_counter += 1;
                    }
                    ui.end_row();
                }
            });

        if let MonthViewAction::DateSelected(date) | MonthViewAction::CreateEvent(date) = action {
            self.selected_date = Some(date);
        }

        action
    }

    fn render_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous month").clicked() {
                self.previous_month();
            }
            ui.label(
                egui::RichText::new(self.current_date.format("%B %Y").to_string())
                    .size(18.0)
                    .strong(),
            );
            if ui.button("▶").on_hover_text("Next month").clicked() {
                self.next_month();
            }
            ui.add_space(12.0);
            if ui.button("Today").clicked() {
                self.jump_to_today();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::event::MockEventSource;
    use chrono::NaiveTime;
    use mockall::predicate::eq;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn event_on(day: NaiveDate, title: &str) -> Event {
        Event::new(title, day, NaiveTime::from_hms_opt(9, 0, 0).unwrap()).unwrap()
    }

    #[test]
    fn test_events_for_cell_skips_uncached_dates() {
        let mut source = MockEventSource::new();
        source
            .expect_event_dates()
            .returning(|| [date(1, 10)].into_iter().collect());
        source
            .expect_events_on()
            .with(eq(date(1, 10)))
            .times(1)
            .returning(|d| vec![event_on(d, "A"), event_on(d, "B")]);

        let mut view = MonthView::new(date(1, 1), 0);
        view.refresh_event_dates(&source);

        assert_eq!(view.events_for_cell(&source, date(1, 10)).len(), 2);
        assert!(view.events_for_cell(&source, date(1, 11)).is_empty());
    }

    #[test]
    fn test_month_navigation() {
        let mut view = MonthView::new(date(1, 31), 1);
        view.next_month();
        assert_eq!(view.current_date(), date(2, 29));
        view.previous_month();
        view.previous_month();
        assert_eq!(view.current_date(), NaiveDate::from_ymd_opt(2023, 12, 29).unwrap());
    }

    #[test]
    fn test_new_selects_today() {
        let view = MonthView::new(date(5, 5), 8);
        assert_eq!(view.selected_date(), Some(date(5, 5)));
    }
}
