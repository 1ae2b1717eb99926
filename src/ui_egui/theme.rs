//! Theme module for the scheduler window.
//!
//! Defines the CalendarTheme colors and the conversion from stored event
//! colors to egui::Color32.

use egui::Color32;

use crate::config::ThemeChoice;
use crate::models::color::EventColor;

/// Colors used by the calendar grid and the window chrome
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,
    pub app_background: Color32,
    /// Calendar grid background, also used for cells outside the month
    pub calendar_background: Color32,
    pub weekend_background: Color32,
    pub today_background: Color32,
    pub today_border: Color32,
    pub day_background: Color32,
    pub day_border: Color32,
    /// Border of the selected day cell
    pub selected_border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(236, 236, 236),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            selected_border: Color32::from_rgb(40, 90, 200),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(34, 34, 34),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            selected_border: Color32::from_rgb(150, 190, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    pub fn for_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Dark => Self::dark(),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

pub fn event_color32(color: EventColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
