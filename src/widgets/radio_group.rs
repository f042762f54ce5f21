use crate::colors;
use crate::options::SettingOption;
use eframe::egui;

use super::Text;

/// Titled row of radio buttons over an option set.
pub struct RadioGroup<'a, T: SettingOption> {
    name: &'a str,
    title: Option<&'a str>,
    options: &'a [T],
    selected: T,
}

impl<'a, T: SettingOption> RadioGroup<'a, T> {
    pub fn new(name: &'a str, options: &'a [T], selected: T) -> Self {
        Self {
            name,
            title: None,
            options,
            selected,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Renders the group and returns a newly picked option, if any.
    pub fn show(self, ui: &mut egui::Ui) -> Option<T> {
        let mut picked = None;

        ui.push_id(self.name, |ui| {
            if let Some(title) = self.title {
                Text::new(title)
                    .size(12.0)
                    .uppercase(true)
                    .color(colors::FIELD_TITLE_TEXT)
                    .show(ui);
            }

            ui.horizontal_wrapped(|ui| {
                for option in self.options {
                    let is_selected = *option == self.selected;
                    if ui.radio(is_selected, option.label()).clicked() && !is_selected {
                        picked = Some(*option);
                    }
                }
            });
        });

        picked
    }
}
