//! Table of every stored event.

use std::cmp::Ordering;

use egui::{RichText, Sense, Vec2};
use egui_extras::{Column, TableBuilder};

use super::{Screen, ScreenAction};
use crate::models::event::Event;
use crate::services::event::EventManager;
use crate::ui_egui::theme::{event_color32, CalendarTheme};

const ROW_HEIGHT: f32 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Date,
    Title,
    Description,
    Time,
    Color,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Date,
        SortColumn::Title,
        SortColumn::Description,
        SortColumn::Time,
        SortColumn::Color,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::Date => "Date",
            SortColumn::Title => "Title",
            SortColumn::Description => "Description",
            SortColumn::Time => "Time",
            SortColumn::Color => "Color",
        }
    }

    fn compare(&self, a: &Event, b: &Event) -> Ordering {
        let primary = match self {
            SortColumn::Date => a
                .event_date
                .cmp(&b.event_date)
                .then(a.event_time.cmp(&b.event_time)),
            SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortColumn::Description => a.description_text().cmp(&b.description_text()),
            SortColumn::Time => a.event_time.cmp(&b.event_time),
            SortColumn::Color => a.event_color.to_hex().cmp(&b.event_color.to_hex()),
        };
        primary.then(a.id.cmp(&b.id))
    }
}

/// Rows, sort order and selection of the event table.
#[derive(Debug, Clone, Default)]
pub struct EventTableState {
    rows: Vec<Event>,
    sort: Option<(SortColumn, bool)>,
    selected: Option<i64>,
}

impl EventTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows; the selection is kept if its id is still present.
    pub fn set_rows(&mut self, rows: Vec<Event>) {
        self.rows = rows;
        if let Some(id) = self.selected {
            if !self.rows.iter().any(|e| e.id == Some(id)) {
                self.selected = None;
            }
        }
        self.apply_sort();
    }

    pub fn reload(&mut self, manager: &EventManager) {
        self.set_rows(manager.get_all());
    }

    pub fn rows(&self) -> &[Event] {
        &self.rows
    }

    pub fn sort(&self) -> Option<(SortColumn, bool)> {
        self.sort
    }

    /// Sort by `column`; clicking the same column again reverses the order.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((current, ascending)) if current == column => Some((column, !ascending)),
            _ => Some((column, true)),
        };
        self.apply_sort();
    }

    fn apply_sort(&mut self) {
        let Some((column, ascending)) = self.sort else {
            return;
        };
        self.rows.sort_by(|a, b| {
            let ordering = column.compare(a, b);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }

    pub fn select(&mut self, id: Option<i64>) {
        self.selected = id;
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_event(&self) -> Option<&Event> {
        let id = self.selected?;
        self.rows.iter().find(|e| e.id == Some(id))
    }
}

/// "View All Events" page.
pub struct EventTableScreen {
    state: EventTableState,
}

impl EventTableScreen {
    pub fn new() -> Self {
        Self {
            state: EventTableState::new(),
        }
    }

    pub fn state(&self) -> &EventTableState {
        &self.state
    }

    pub fn reload(&mut self, manager: &EventManager) {
        self.state.reload(manager);
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.state.selected_event()
    }

    pub fn select(&mut self, id: Option<i64>) {
        self.state.select(id);
    }
}

impl Default for EventTableScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for EventTableScreen {
    fn title(&self) -> String {
        "All Events".to_string()
    }

    fn show(
        &mut self,
        ui: &mut egui::Ui,
        _manager: &EventManager,
        _theme: &CalendarTheme,
    ) -> ScreenAction {
        ui.horizontal(|ui| {
            ui.heading(self.title());
            ui.label(
                RichText::new(format!("({} events)", self.state.rows().len()))
                    .color(ui.visuals().weak_text_color()),
            );
        });
        ui.add_space(6.0);

        if self.state.rows().is_empty() {
            ui.label("No events yet. Use Add Event to create one.");
            return ScreenAction::None;
        }

        let mut action = ScreenAction::None;
        let mut clicked_id = None;
        let mut header_clicks = Vec::new();
        let sort = self.state.sort();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(90.0))
            .column(Column::initial(160.0).at_least(80.0).clip(true))
            .column(Column::remainder().at_least(120.0).clip(true))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(70.0))
            .header(ROW_HEIGHT, |mut header| {
                for column in SortColumn::ALL {
                    header.col(|ui| {
                        if header_cell(ui, column, sort) {
                            header_clicks.push(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, self.state.rows().len(), |mut row| {
                    let event = &self.state.rows()[row.index()];
                    row.set_selected(event.id.is_some() && event.id == self.state.selected_id());

                    row.col(|ui| {
                        ui.label(event.event_date.format("%Y-%m-%d").to_string());
                    });
                    row.col(|ui| {
                        ui.label(&event.title);
                    });
                    row.col(|ui| {
                        ui.label(event.description_text().unwrap_or(""));
                    });
                    row.col(|ui| {
                        ui.label(event.time_label());
                    });
                    row.col(|ui| {
                        let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                        ui.painter()
                            .circle_filled(rect.center(), 6.0, event_color32(event.event_color));
                        ui.monospace(event.event_color.to_hex());
                    });

                    let response = row.response();
                    if response.double_clicked() {
                        if let Some(id) = event.id {
                            action = ScreenAction::EditRequested(id);
                        }
                    }
                    if response.clicked() {
                        clicked_id = event.id;
                    }
                });
            });

        for column in header_clicks {
            self.state.toggle_sort(column);
        }
        if clicked_id.is_some() {
            self.state.select(clicked_id);
        }

        action
    }

    fn on_enter(&mut self, manager: &EventManager) {
        self.reload(manager);
    }
}

/// Clickable column header with a sort arrow. Returns true when clicked.
fn header_cell(ui: &mut egui::Ui, column: SortColumn, sort: Option<(SortColumn, bool)>) -> bool {
    let arrow = match sort {
        Some((current, true)) if current == column => " ▲",
        Some((current, false)) if current == column => " ▼",
        _ => "",
    };
    let label = RichText::new(format!("{}{}", column.header(), arrow)).strong();
    ui.add(egui::Label::new(label).sense(Sense::click()))
        .on_hover_text("Click to sort")
        .clicked()
}
