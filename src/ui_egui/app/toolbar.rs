use super::SchedulerApp;
use crate::ui_egui::screens::ScreenId;

/// Commands reachable from the toolbar, the menus and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Home,
    AddEvent,
    DeleteEvent,
    EditEvent,
    ViewAll,
    Refresh,
    Exit,
}

impl ShellCommand {
    pub const TOOLBAR: [ShellCommand; 5] = [
        ShellCommand::Home,
        ShellCommand::AddEvent,
        ShellCommand::DeleteEvent,
        ShellCommand::EditEvent,
        ShellCommand::ViewAll,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShellCommand::Home => "🏠 Home",
            ShellCommand::AddEvent => "➕ Add Event",
            ShellCommand::DeleteEvent => "🗑 Delete Event",
            ShellCommand::EditEvent => "✏ Edit Event",
            ShellCommand::ViewAll => "📋 View All Events",
            ShellCommand::Refresh => "🔄 Refresh",
            ShellCommand::Exit => "Exit",
        }
    }

    pub fn shortcut(&self) -> Option<&'static str> {
        match self {
            ShellCommand::Home => Some("Ctrl+H"),
            ShellCommand::AddEvent => Some("Ctrl+N"),
            ShellCommand::DeleteEvent => Some("Del"),
            ShellCommand::EditEvent => Some("Ctrl+E"),
            ShellCommand::ViewAll => Some("Ctrl+L"),
            ShellCommand::Refresh => Some("F5"),
            ShellCommand::Exit => Some("Ctrl+Q"),
        }
    }

    /// Shown in the status bar while the button is hovered
    pub fn status_tip(&self) -> &'static str {
        match self {
            ShellCommand::Home => "Return to the calendar",
            ShellCommand::AddEvent => "Add a new event",
            ShellCommand::DeleteEvent => "Delete the event selected in the event viewer",
            ShellCommand::EditEvent => "Edit the event selected in the event viewer",
            ShellCommand::ViewAll => "View all events in a table",
            ShellCommand::Refresh => "Reload events from the database",
            ShellCommand::Exit => "Close the application",
        }
    }

    /// Menu label with its shortcut right after it.
    pub fn menu_label(&self) -> String {
        match self.shortcut() {
            Some(keys) => format!("{}    {}", self.label(), keys),
            None => self.label().to_string(),
        }
    }
}

impl SchedulerApp {
    pub(super) fn render_toolbar(&mut self, ctx: &egui::Context) {
        let mut clicked = None;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.horizontal(|ui| {
                for command in ShellCommand::TOOLBAR {
                    let response = ui.button(command.label());
                    if response.hovered() {
                        self.state.status_tip = Some(command.status_tip());
                    }
                    if response.clicked() {
                        clicked = Some(command);
                    }
                }
            });
            ui.add_space(2.0);
        });

        if let Some(command) = clicked {
            self.run_command(ctx, command);
        }
    }

    pub(super) fn run_command(&mut self, ctx: &egui::Context, command: ShellCommand) {
        log::debug!("Command: {:?}", command);
        match command {
            ShellCommand::Home => self.navigate_to(ScreenId::Home),
            ShellCommand::AddEvent => self.open_add_form(None),
            ShellCommand::DeleteEvent => self.delete_selected(),
            ShellCommand::EditEvent => self.edit_selected(),
            ShellCommand::ViewAll => self.navigate_to(ScreenId::EventList),
            ShellCommand::Refresh => {
                self.refresh_data();
                self.toast_manager.info("Events reloaded");
            }
            ShellCommand::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}
