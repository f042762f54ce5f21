use crate::colors;
use eframe::egui;

use super::ARROW_BUTTON_SIZE;

/// Round toggle with a chevron: pointing right while closed, left while open.
pub struct ArrowButton {
    is_open: bool,
}

impl ArrowButton {
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }
}

impl egui::Widget for ArrowButton {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ARROW_BUTTON_SIZE, ARROW_BUTTON_SIZE),
            egui::Sense::click(),
        );
        let hint = if self.is_open {
            "Close article parameters"
        } else {
            "Open article parameters"
        };
        let response = response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text(hint);

        if ui.is_rect_visible(rect) {
            let openness = ui.ctx().animate_bool(response.id, self.is_open);
            // +1 points right, -1 points left
            let direction = 1.0 - 2.0 * openness;

            let fill = if response.hovered() {
                colors::ARROW_HOVER_FILL
            } else {
                colors::ARROW_FILL
            };

            let painter = ui.painter();
            let center = rect.center();
            painter.circle_filled(center, rect.width() / 2.0, fill);

            let half = rect.width() * 0.1;
            let tip = center + egui::vec2(half * direction, 0.0);
            let top = center + egui::vec2(-half * direction, -2.0 * half);
            let bottom = center + egui::vec2(-half * direction, 2.0 * half);
            let stroke = egui::Stroke::new(2.5, colors::ARROW_STROKE);
            painter.line_segment([top, tip], stroke);
            painter.line_segment([tip, bottom], stroke);
        }

        response
    }
}
