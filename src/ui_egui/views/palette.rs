use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub empty_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub selected_border: Color32,
    pub text: Color32,
    pub header_text: Color32,
    pub hover_border: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            empty_bg: theme.calendar_background,
            border: theme.day_border,
            today_border: theme.today_border,
            selected_border: theme.selected_border,
            text: theme.text_primary,
            header_text: theme.text_secondary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
        }
    }
}
