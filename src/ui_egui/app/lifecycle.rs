use super::confirm::ConfirmDialogState;
use super::context::AppContext;
use super::message::MessageDialogState;
use super::state::AppState;
use super::toast::ToastManager;
use super::SchedulerApp;
use crate::config::AppConfig;
use crate::services::event::EventManager;
use crate::ui_egui::screens::{EventFormScreen, EventTableScreen, HomeScreen, Screen};
use crate::ui_egui::theme::CalendarTheme;

impl SchedulerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, manager: EventManager, config: AppConfig) -> Self {
        let active_theme = CalendarTheme::for_choice(config.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        let app = Self::with_parts(manager, config, active_theme);
        log::info!(
            "Scheduler window ready ({} events in store)",
            app.context.manager().get_all().len()
        );
        app
    }

    /// Build the app without a window; used by `new` and by tests.
    pub(super) fn with_parts(
        manager: EventManager,
        config: AppConfig,
        active_theme: CalendarTheme,
    ) -> Self {
        let default_color = config.default_color();
        let mut home = HomeScreen::new(config.first_day_of_week);
        home.on_enter(&manager);

        Self {
            home,
            add_form: EventFormScreen::new(default_color),
            edit_form: EventFormScreen::new(default_color),
            table: EventTableScreen::new(),
            context: AppContext::new(manager),
            active_theme,
            state: AppState::new(),
            toast_manager: ToastManager::new(),
            confirm_dialog: ConfirmDialogState::new(),
            message_dialog: MessageDialogState::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.modal_open() {
            self.handle_keyboard_shortcuts(ctx);
        }

        self.state.status_tip = None;
        self.render_menu_bar(ctx);
        self.render_toolbar(ctx);
        self.render_status_bar(ctx);

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.show_current_screen(ui))
            .inner;
        self.handle_screen_action(action);

        self.handle_confirm_dialog(ctx);
        self.message_dialog.render(ctx);
        if self.toast_manager.has_toasts() {
            self.toast_manager.render(ctx, self.active_theme.is_dark);
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Shutting down scheduler");
        self.context.shutdown();
    }

    pub(super) fn modal_open(&self) -> bool {
        self.confirm_dialog.is_open() || self.message_dialog.is_open()
    }
}
