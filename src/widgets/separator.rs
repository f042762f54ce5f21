use eframe::egui;

const SEPARATOR_SPACING: f32 = 24.0;

/// Horizontal rule between groups of form fields.
pub struct Separator;

impl egui::Widget for Separator {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.add(
            egui::Separator::default()
                .horizontal()
                .spacing(SEPARATOR_SPACING),
        )
    }
}
