//! Add/edit event form.
//!
//! `EventFormState` holds the field values and turns them into an [`Event`];
//! `EventFormScreen` renders it and talks to the store on submit.

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use egui::{Color32, RichText};
use egui_extras::DatePickerButton;

use super::{Screen, ScreenAction};
use crate::models::color::EventColor;
use crate::models::event::{Event, EventValidationError};
use crate::services::event::EventManager;
use crate::ui_egui::color_picker::ColorPicker;
use crate::ui_egui::theme::CalendarTheme;

const FORM_LABEL_WIDTH: f32 = 110.0;
const TITLE_PLACEHOLDER: &str = "Enter a name for your Event";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventFormState {
    pub mode: FormMode,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub hour: u32,
    pub minute: u32,
    pub color: ColorPicker,
}

impl EventFormState {
    /// Blank add-mode form for `today` at `now`.
    pub fn new(today: NaiveDate, now: NaiveTime, default_color: EventColor) -> Self {
        Self {
            mode: FormMode::Add,
            title: String::new(),
            date: today,
            description: String::new(),
            hour: now.hour(),
            minute: now.minute(),
            color: ColorPicker::new(default_color),
        }
    }

    /// Edit-mode form prefilled from a stored event.
    pub fn from_event(event: &Event) -> Option<Self> {
        let id = event.id?;
        Some(Self {
            mode: FormMode::Edit(id),
            title: event.title.clone(),
            date: event.event_date,
            description: event.description.clone().unwrap_or_default(),
            hour: event.event_time.hour(),
            minute: event.event_time.minute(),
            color: ColorPicker::new(event.event_color),
        })
    }

    pub fn reset(&mut self, today: NaiveDate, now: NaiveTime, default_color: EventColor) {
        *self = Self::new(today, now, default_color);
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour.min(23), self.minute.min(59), 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn to_event(&self) -> Result<Event, EventValidationError> {
        let mut event = Event::builder()
            .title(self.title.trim())
            .date(self.date)
            .description(self.description.trim_end())
            .time(self.time())
            .color(self.color.color().to_hex())
            .build()?;

        if let FormMode::Edit(id) = self.mode {
            event.id = Some(id);
        }
        Ok(event)
    }
}

/// Form page used for both adding and editing.
pub struct EventFormScreen {
    state: EventFormState,
    default_color: EventColor,
}

impl EventFormScreen {
    pub fn new(default_color: EventColor) -> Self {
        let now = Local::now();
        Self {
            state: EventFormState::new(now.date_naive(), now.time(), default_color),
            default_color,
        }
    }

    pub fn state(&self) -> &EventFormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EventFormState {
        &mut self.state
    }

    /// Clear the fields back to today, now and the default color.
    pub fn reset(&mut self) {
        let now = Local::now();
        self.state
            .reset(now.date_naive(), now.time(), self.default_color);
    }

    pub fn preset_date(&mut self, date: NaiveDate) {
        self.state.date = date;
    }

    /// Switch to edit mode for `event`. Returns false if it has no id.
    pub fn load_event(&mut self, event: &Event) -> bool {
        match EventFormState::from_event(event) {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    fn submit(&mut self, manager: &EventManager) -> ScreenAction {
        let event = match self.state.to_event() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Event form rejected: {}", e);
                return ScreenAction::ValidationFailed;
            }
        };

        match self.state.mode {
            FormMode::Add => {
                if manager.add(&event) {
                    self.reset();
                    ScreenAction::EventSaved {
                        title: event.title,
                        date: event.event_date,
                    }
                } else {
                    store_failure(manager)
                }
            }
            FormMode::Edit(_) => {
                if manager.update(&event) {
                    ScreenAction::EventUpdated { title: event.title }
                } else {
                    store_failure(manager)
                }
            }
        }
    }

    fn render_fields(&mut self, ui: &mut egui::Ui) {
        let state = &mut self.state;

        labeled_row(
            ui,
            if state.title.trim().is_empty() {
                RichText::new("Title:")
                    .strong()
                    .color(Color32::from_rgb(255, 150, 150))
            } else {
                RichText::new("Title:").strong()
            },
            |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.title)
                        .hint_text(TITLE_PLACEHOLDER)
                        .desired_width(320.0),
                );
                ui.label(RichText::new("*").color(Color32::from_rgb(255, 150, 150)));
            },
        );

        labeled_row(ui, "Date:", |ui| {
            ui.add(DatePickerButton::new(&mut state.date).id_source("event_form_date"));
        });

        labeled_row(ui, "Start time:", |ui| {
            ui.add(
                egui::DragValue::new(&mut state.hour)
                    .range(0..=23)
                    .custom_formatter(|n, _| format!("{:02}", n as u32)),
            );
            ui.label(":");
            ui.add(
                egui::DragValue::new(&mut state.minute)
                    .range(0..=59)
                    .custom_formatter(|n, _| format!("{:02}", n as u32)),
            );
        });

        labeled_row(ui, "Description:", |ui| {
            let width = ui.available_width().min(480.0);
            ui.add_sized(
                [width, 100.0],
                egui::TextEdit::multiline(&mut state.description),
            );
        });

        labeled_row(ui, "Color:", |ui| {
            ui.vertical(|ui| {
                state.color.show(ui);
            });
        });
    }
}

impl Screen for EventFormScreen {
    fn title(&self) -> String {
        match self.state.mode {
            FormMode::Add => "Add Event".to_string(),
            FormMode::Edit(_) => "Edit Event".to_string(),
        }
    }

    fn show(
        &mut self,
        ui: &mut egui::Ui,
        manager: &EventManager,
        _theme: &CalendarTheme,
    ) -> ScreenAction {
        ui.heading(self.title());
        ui.add_space(8.0);

        self.render_fields(ui);

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        let mut action = ScreenAction::None;
        indented_row(ui, |ui| {
            let submit_label = if self.state.is_edit() {
                "Save Changes"
            } else {
                "Add Event"
            };
            if ui.button(submit_label).clicked() {
                action = self.submit(manager);
            }
            if ui.button("Cancel").clicked() {
                action = ScreenAction::Cancelled;
            }
        });

        action
    }

    fn on_enter(&mut self, _manager: &EventManager) {
        if !self.state.is_edit() {
            self.reset();
        }
    }

    fn on_leave(&mut self) {
        if !self.state.is_edit() {
            self.reset();
        }
    }
}

fn store_failure(manager: &EventManager) -> ScreenAction {
    ScreenAction::StoreFailed {
        message: manager
            .last_error()
            .unwrap_or_else(|| "Unknown database error".to_string()),
    }
}

fn labeled_row<F>(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        render_form_label(ui, label);
        add_contents(ui);
    });
}

fn render_form_label(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>) {
    let text = label.into();
    ui.allocate_ui_with_layout(
        egui::Vec2::new(FORM_LABEL_WIDTH, 24.0),
        egui::Layout::right_to_left(egui::Align::Center),
        move |ui| {
            ui.label(text);
        },
    );
}

fn indented_row<F>(ui: &mut egui::Ui, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        ui.add_space(FORM_LABEL_WIDTH);
        add_contents(ui);
    });
}
