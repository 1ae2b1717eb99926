//! Color picker used by the event form.
//!
//! Shows the current color as a swatch with its hex code, a row of preset
//! swatches and a button that opens egui's full color chooser.

use egui::{Color32, Rounding, Sense, Stroke, Vec2};

use crate::models::color::EventColor;
use crate::ui_egui::theme::event_color32;

const PRESETS: [(&str, EventColor); 8] = [
    ("Blue", EventColor::BLUE),
    ("Sky", EventColor::rgb(0x3B, 0x82, 0xF6)),
    ("Green", EventColor::rgb(0x10, 0xB9, 0x81)),
    ("Red", EventColor::rgb(0xEF, 0x44, 0x44)),
    ("Amber", EventColor::rgb(0xF5, 0x9E, 0x0B)),
    ("Purple", EventColor::rgb(0x8B, 0x5C, 0xF6)),
    ("Pink", EventColor::rgb(0xEC, 0x48, 0x99)),
    ("Gray", EventColor::rgb(0x6B, 0x72, 0x80)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPicker {
    current: EventColor,
}

impl ColorPicker {
    pub fn new(initial: EventColor) -> Self {
        Self { current: initial }
    }

    pub fn color(&self) -> EventColor {
        self.current
    }

    /// Returns true when the color actually changed.
    pub fn set_color(&mut self, color: EventColor) -> bool {
        if color == self.current {
            return false;
        }
        self.current = color;
        true
    }

    /// Render the picker. Returns true when the user changed the color.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(50.0, 22.0), Sense::hover());
            ui.painter()
                .rect_filled(rect, Rounding::same(3.0), event_color32(self.current));
            ui.painter()
                .rect_stroke(rect, Rounding::same(3.0), Stroke::new(1.0, Color32::from_gray(153)));

            ui.monospace(self.current.to_hex());

            let mut rgb = self.current.to_array();
            if ui
                .color_edit_button_srgb(&mut rgb)
                .on_hover_text("Choose Color")
                .changed()
            {
                changed |= self.set_color(EventColor::from_array(rgb));
            }
        });

        ui.horizontal_wrapped(|ui| {
            for (name, preset) in PRESETS {
                let (rect, response) = ui.allocate_exact_size(Vec2::splat(18.0), Sense::click());
                ui.painter().rect_filled(rect, Rounding::same(9.0), event_color32(preset));
                if preset == self.current {
                    ui.painter().rect_stroke(
                        rect.expand(2.0),
                        Rounding::same(10.0),
                        Stroke::new(2.0, ui.visuals().strong_text_color()),
                    );
                }
                if response.on_hover_text(name).clicked() {
                    changed |= self.set_color(preset);
                }
            }
        });

        changed
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(EventColor::default())
    }
}
