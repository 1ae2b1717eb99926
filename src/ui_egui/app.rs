mod confirm;
mod context;
mod lifecycle;
mod menu;
mod message;
mod navigation;
mod shortcuts;
mod state;
mod status_bar;
mod toast;
mod toolbar;

use self::confirm::ConfirmDialogState;
use self::context::AppContext;
use self::message::MessageDialogState;
use self::state::AppState;
use self::toast::ToastManager;
use crate::ui_egui::screens::{EventFormScreen, EventTableScreen, HomeScreen};
use crate::ui_egui::theme::CalendarTheme;

/// Main window: menu bar, toolbar, status bar and the active screen.
pub struct SchedulerApp {
    /// Event store
    context: AppContext,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Which screen is showing plus transient shell state
    state: AppState,
    home: HomeScreen,
    add_form: EventFormScreen,
    edit_form: EventFormScreen,
    table: EventTableScreen,
    toast_manager: ToastManager,
    confirm_dialog: ConfirmDialogState,
    message_dialog: MessageDialogState,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
