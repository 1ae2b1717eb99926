use super::toolbar::ShellCommand;
use super::SchedulerApp;
use egui::Context;

impl SchedulerApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &Context) {
        let mut chosen = None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    menu_item(ui, ShellCommand::Home, &mut chosen);
                    ui.separator();
                    menu_item(ui, ShellCommand::Exit, &mut chosen);
                });
                ui.menu_button("Edit", |ui| {
                    menu_item(ui, ShellCommand::AddEvent, &mut chosen);
                    menu_item(ui, ShellCommand::EditEvent, &mut chosen);
                    menu_item(ui, ShellCommand::DeleteEvent, &mut chosen);
                });
                ui.menu_button("View", |ui| {
                    menu_item(ui, ShellCommand::ViewAll, &mut chosen);
                    menu_item(ui, ShellCommand::Refresh, &mut chosen);
                });
            });
        });

        if let Some(command) = chosen {
            self.run_command(ctx, command);
        }
    }
}

fn menu_item(ui: &mut egui::Ui, command: ShellCommand, chosen: &mut Option<ShellCommand>) {
    if ui
        .button(command.menu_label())
        .on_hover_text(command.status_tip())
        .clicked()
    {
        *chosen = Some(command);
        ui.close_menu();
    }
}
