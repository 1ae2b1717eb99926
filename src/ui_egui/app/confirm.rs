//! Confirmation dialog for destructive actions.

use chrono::NaiveDate;
use egui::{Context, RichText};

use super::SchedulerApp;

/// Actions that need the user's confirmation first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteEvent {
        event_id: i64,
        title: String,
        date: NaiveDate,
    },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete Event",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteEvent { title, date, .. } => format!(
                "Are you sure you want to delete \"{}\" on {}?\n\nThis action cannot be undone!",
                title,
                date.format("%Y-%m-%d")
            ),
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete",
        }
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
    /// Dialog is still open (or was never opened)
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
    confirmed: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    /// Render the dialog and return the result
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.vertical(|ui| {
                        ui.label(action.message());
                    });
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_button = egui::Button::new(
                            RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                        )
                        .fill(egui::Color32::from_rgb(180, 60, 60));

                        if ui.add(confirm_button).clicked() {
                            result = ConfirmResult::Confirmed;
                        }

                        ui.add_space(10.0);

                        if ui.button("Cancel").clicked() {
                            result = ConfirmResult::Cancelled;
                        }
                    });
                });

                ui.add_space(5.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        self.resolve(result);
        result
    }

    /// Close the dialog for a finished result, keeping a confirmed action.
    fn resolve(&mut self, result: ConfirmResult) {
        match result {
            ConfirmResult::Confirmed => self.confirmed = self.pending_action.take(),
            ConfirmResult::Cancelled => self.pending_action = None,
            ConfirmResult::Pending => {}
        }
    }

    /// Take the action the user just confirmed
    pub fn take_confirmed(&mut self) -> Option<ConfirmAction> {
        self.confirmed.take()
    }
}

impl SchedulerApp {
    pub(super) fn handle_confirm_dialog(&mut self, ctx: &Context) {
        if self.confirm_dialog.render(ctx) != ConfirmResult::Confirmed {
            return;
        }
        if let Some(action) = self.confirm_dialog.take_confirmed() {
            self.execute_confirmed_action(action);
        }
    }

    fn execute_confirmed_action(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteEvent {
                event_id,
                title,
                date,
            } => {
                if self.context.manager().delete(event_id) {
                    self.message_dialog.info(
                        "Event Deleted",
                        format!("\"{}\" on {} was deleted.", title, date.format("%Y-%m-%d")),
                    );
                    self.refresh_data();
                } else {
                    let reason = self
                        .context
                        .manager()
                        .last_error()
                        .unwrap_or_else(|| format!("Event with id {} not found", event_id));
                    self.message_dialog
                        .error("Delete Failed", format!("Failed to delete event: {}", reason));
                }
            }
        }
    }
}
