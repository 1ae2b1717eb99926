//! Status bar showing the hovered toolbar tip, or the current screen and
//! a short summary of it.

use super::SchedulerApp;
use crate::ui_egui::screens::ScreenId;
use egui::{Color32, RichText};

/// Get theme-aware secondary text color
fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

impl SchedulerApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let is_dark = self.active_theme.is_dark;
        let secondary = secondary_text_color(is_dark);
        let left = self.status_text();
        let db_path = self.context.manager().db_path().to_string();

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new(left).size(12.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(db_path).size(11.0).color(secondary));
                    });
                });
            });
    }

    /// Toolbar tip while hovering, otherwise a summary of the current screen.
    pub(super) fn status_text(&self) -> String {
        if let Some(tip) = self.state.status_tip {
            return tip.to_string();
        }

        match self.current_screen() {
            ScreenId::Home => match self.home.selected_date() {
                Some(date) => {
                    let count = self.context.manager().get_by_date(date).len();
                    format!(
                        "{}  |  {}: {} event{}",
                        ScreenId::Home.label(),
                        date.format("%a %b %-d, %Y"),
                        count,
                        if count == 1 { "" } else { "s" }
                    )
                }
                None => ScreenId::Home.label().to_string(),
            },
            ScreenId::EventList => {
                let rows = self.table.state().rows().len();
                match self.table.selected_event() {
                    Some(event) => format!(
                        "{}  |  {} events  |  Selected: {}",
                        ScreenId::EventList.label(),
                        rows,
                        event.title
                    ),
                    None => format!("{}  |  {} events", ScreenId::EventList.label(), rows),
                }
            }
            screen => screen.label().to_string(),
        }
    }
}
