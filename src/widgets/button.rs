use crate::colors;
use eframe::egui::{self, RichText};

const BUTTON_MIN_SIZE: egui::Vec2 = egui::vec2(120.0, 40.0);

/// Visual role of a form button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Primary action, filled.
    Apply,
    /// Secondary action, outlined.
    Clear,
}

/// Uppercase labelled form button.
pub struct Button<'a> {
    title: &'a str,
    kind: ButtonKind,
}

impl<'a> Button<'a> {
    pub fn new(title: &'a str, kind: ButtonKind) -> Self {
        Self { title, kind }
    }
}

impl egui::Widget for Button<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (fill, text_color) = match self.kind {
            ButtonKind::Apply => (colors::APPLY_FILL, colors::APPLY_TEXT),
            ButtonKind::Clear => (colors::CLEAR_FILL, colors::CLEAR_TEXT),
        };

        let label = RichText::new(self.title.to_uppercase()).color(text_color);

        ui.add(
            egui::Button::new(label)
                .fill(fill)
                .stroke(egui::Stroke::new(1.0, colors::BUTTON_STROKE))
                .corner_radius(4.0)
                .min_size(BUTTON_MIN_SIZE),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}
