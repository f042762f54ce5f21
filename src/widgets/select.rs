use crate::colors;
use crate::options::SettingOption;
use eframe::egui::{self, Color32, text::LayoutJob};
use std::hash::Hash;

use super::Text;

/// Titled combo box over an option set.
pub struct Select<'a, T: SettingOption> {
    id_salt: egui::Id,
    title: Option<&'a str>,
    options: &'a [T],
    selected: T,
}

impl<'a, T: SettingOption> Select<'a, T> {
    pub fn new(id_salt: impl Hash, options: &'a [T], selected: T) -> Self {
        Self {
            id_salt: egui::Id::new(id_salt),
            title: None,
            options,
            selected,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Renders the control and returns a newly picked option, if any.
    pub fn show(self, ui: &mut egui::Ui) -> Option<T> {
        let mut picked = None;

        ui.vertical(|ui| {
            if let Some(title) = self.title {
                Text::new(title)
                    .size(12.0)
                    .uppercase(true)
                    .color(colors::FIELD_TITLE_TEXT)
                    .show(ui);
            }

            let text_color = ui.visuals().text_color();
            egui::ComboBox::from_id_salt(self.id_salt)
                .selected_text(option_text(self.selected, text_color))
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for option in self.options {
                        let is_selected = *option == self.selected;
                        if ui
                            .selectable_label(is_selected, option_text(*option, text_color))
                            .clicked()
                            && !is_selected
                        {
                            picked = Some(*option);
                        }
                    }
                });
        });

        picked
    }
}

/// Option label, prefixed with a swatch when the option token is a color.
fn option_text<T: SettingOption>(option: T, text_color: Color32) -> LayoutJob {
    let font = egui::FontId::proportional(14.0);
    let mut job = LayoutJob::default();
    if let Ok(swatch) = Color32::from_hex(option.value()) {
        job.append(
            "● ",
            0.0,
            egui::TextFormat::simple(font.clone(), swatch),
        );
    }
    job.append(
        option.label(),
        0.0,
        egui::TextFormat::simple(font, text_color),
    );
    job
}
