//! Modal message box for confirmations, warnings and store errors.

use egui::{Color32, Context, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl MessageLevel {
    fn icon(&self) -> &'static str {
        match self {
            MessageLevel::Info => "ℹ",
            MessageLevel::Warning => "⚠",
            MessageLevel::Error => "✗",
        }
    }

    fn color(&self) -> Color32 {
        match self {
            MessageLevel::Info => Color32::from_rgb(70, 130, 220),
            MessageLevel::Warning => Color32::from_rgb(220, 150, 50),
            MessageLevel::Error => Color32::from_rgb(200, 60, 60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub title: String,
    pub body: String,
}

/// One message at a time; later messages wait until the current one is dismissed.
#[derive(Debug, Default)]
pub struct MessageDialogState {
    queue: Vec<Message>,
}

impl MessageDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, level: MessageLevel, title: impl Into<String>, body: impl Into<String>) {
        self.queue.push(Message {
            level,
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn info(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.show(MessageLevel::Info, title, body);
    }

    pub fn warning(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.show(MessageLevel::Warning, title, body);
    }

    pub fn error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.show(MessageLevel::Error, title, body);
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn current(&self) -> Option<&Message> {
        self.queue.first()
    }

    pub fn dismiss(&mut self) {
        if !self.queue.is_empty() {
            self.queue.remove(0);
        }
    }

    pub fn render(&mut self, ctx: &Context) {
        let Some(message) = self.current() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(message.title.as_str())
            .id(egui::Id::new("message_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);
                ui.set_max_width(420.0);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(message.level.icon())
                            .size(24.0)
                            .color(message.level.color()),
                    );
                    ui.vertical(|ui| {
                        ui.label(message.body.as_str());
                    });
                });

                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter)) {
            dismissed = true;
        }

        if dismissed {
            self.dismiss();
        }
    }
}
