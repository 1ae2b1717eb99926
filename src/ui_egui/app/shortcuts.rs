use super::toolbar::ShellCommand;
use super::SchedulerApp;
use crate::ui_egui::screens::ScreenId;
use egui::{Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonthStep {
    Previous,
    Next,
    Today,
}

impl SchedulerApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let text_focused = ctx.memory(|m| m.focused().is_some());
        let on_home = self.current_screen() == ScreenId::Home;
        let on_table = self.current_screen() == ScreenId::EventList;

        let mut command = None;
        let mut month_step = None;

        ctx.input_mut(|i| {
            if i.consume_key(Modifiers::COMMAND, Key::N) {
                command = Some(ShellCommand::AddEvent);
            } else if i.consume_key(Modifiers::COMMAND, Key::H) {
                command = Some(ShellCommand::Home);
            } else if i.consume_key(Modifiers::COMMAND, Key::L) {
                command = Some(ShellCommand::ViewAll);
            } else if i.consume_key(Modifiers::COMMAND, Key::E) {
                command = Some(ShellCommand::EditEvent);
            } else if i.consume_key(Modifiers::COMMAND, Key::Q) {
                command = Some(ShellCommand::Exit);
            } else if i.consume_key(Modifiers::NONE, Key::F5) {
                command = Some(ShellCommand::Refresh);
            } else if on_table && !text_focused && i.consume_key(Modifiers::NONE, Key::Delete) {
                command = Some(ShellCommand::DeleteEvent);
            }

            if on_home && !text_focused {
                if i.consume_key(Modifiers::COMMAND, Key::T) {
                    month_step = Some(MonthStep::Today);
                } else if i.key_pressed(Key::ArrowLeft) {
                    month_step = Some(MonthStep::Previous);
                } else if i.key_pressed(Key::ArrowRight) {
                    month_step = Some(MonthStep::Next);
                }
            }

            // Escape backs out of a form without saving
            if i.key_pressed(Key::Escape) && command.is_none() {
                match self.state.current_screen {
                    ScreenId::AddEvent => command = Some(ShellCommand::Home),
                    ScreenId::EditEvent => command = Some(ShellCommand::ViewAll),
                    ScreenId::Home | ScreenId::EventList => {}
                }
            }
        });

        match month_step {
            Some(MonthStep::Previous) => self.home.previous_month(),
            Some(MonthStep::Next) => self.home.next_month(),
            Some(MonthStep::Today) => self.home.jump_to_today(),
            None => {}
        }

        if let Some(command) = command {
            self.run_command(ctx, command);
        }
    }
}
