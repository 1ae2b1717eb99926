//! Day cell rendering for the month view.
//!
//! Paints one day: background, border, day number and the event markers,
//! and reports clicks back to the month view.

use chrono::{Datelike, NaiveDate};
use egui::{Color32, Pos2, Sense, Stroke, Vec2};

use super::markers::{paint_markers, visible_marker_count};
use super::month_view::MonthView;
use super::palette::CalendarCellPalette;
use crate::models::event::Event;

#[derive(Debug, Default, Clone, Copy)]
pub(super) struct DayCellResponse {
    pub clicked: bool,
    pub double_clicked: bool,
}

impl MonthView {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        is_today: bool,
        is_selected: bool,
        is_weekend: bool,
        events: &[Event],
        palette: CalendarCellPalette,
        size: Vec2,
    ) -> DayCellResponse {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let painter = ui.painter();

        let bg_color = if is_today {
            palette.today_bg
        } else if is_weekend {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        painter.rect_filled(rect, 2.0, bg_color);

        let border = if is_selected {
            Stroke::new(2.0, palette.selected_border)
        } else if is_today {
            Stroke::new(1.0, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        painter.rect_stroke(rect, 2.0, border);

        if response.hovered() {
            painter.rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
            painter.rect_filled(rect, 2.0, Color32::from_rgba_unmultiplied(100, 150, 200, 30));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        painter.text(
            Pos2::new(rect.left() + 5.0, rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            date.day().to_string(),
            egui::FontId::proportional(14.0),
            palette.text,
        );

        if !events.is_empty() {
            paint_markers(painter, rect, events);

            let hidden = events.len() - visible_marker_count(rect, events.len());
            if hidden > 0 {
                painter.text(
                    Pos2::new(rect.right() - 4.0, rect.top() + 4.0),
                    egui::Align2::RIGHT_TOP,
                    format!("+{}", hidden),
                    egui::FontId::proportional(10.0),
                    palette.header_text,
                );
            }
        }

        let response = if events.is_empty() {
            response.on_hover_text("Double-click to add an event")
        } else {
            response.on_hover_ui(|ui| {
                ui.label(egui::RichText::new(date.format("%A, %B %-d").to_string()).strong());
                for event in events {
                    ui.label(format!("• {} - {}", event.time_label(), event.title));
                }
            })
        };

        DayCellResponse {
            clicked: response.clicked(),
            double_clicked: response.double_clicked(),
        }
    }
}
