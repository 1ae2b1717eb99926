use crate::ui_egui::screens::ScreenId;

pub struct AppState {
    pub current_screen: ScreenId,
    /// Status tip of the toolbar button hovered this frame
    pub status_tip: Option<&'static str>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_screen: ScreenId::Home,
            status_tip: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
