//! The article parameters form and its draft settings.

use crate::colors;
use crate::options::{
    ArticleSettings, BackgroundColor, ContentWidth, DEFAULT_ARTICLE_SETTINGS, FontColor,
    FontFamily, FontSize, SettingChange, SettingOption,
};
use crate::widgets::{Button, ButtonKind, RadioGroup, Select, Separator, Text};
use eframe::egui;

const FIELD_GAP: f32 = 24.0;

/// What the form asks its owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Commit these settings and close the panel.
    Apply(ArticleSettings),
    /// Restore the default settings and close the panel.
    Reset,
}

/// Form state: a draft copy of the settings, edited until submit.
#[derive(Debug, Clone)]
pub struct ArticleParamsForm {
    draft: ArticleSettings,
}

impl ArticleParamsForm {
    /// Creates the form with a draft copied from the committed settings.
    ///
    /// The copy happens once; later changes to the committed settings are
    /// not mirrored into the draft.
    pub fn new(committed: &ArticleSettings) -> Self {
        Self { draft: *committed }
    }

    pub fn draft(&self) -> &ArticleSettings {
        &self.draft
    }

    pub fn update(&mut self, change: SettingChange) {
        self.draft = self.draft.with(change);
    }

    pub fn submit(&self) -> FormAction {
        FormAction::Apply(self.draft)
    }

    pub fn reset(&mut self) -> FormAction {
        self.draft = DEFAULT_ARTICLE_SETTINGS;
        FormAction::Reset
    }

    /// Renders the form and returns the action triggered this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<FormAction> {
        Text::new("Article parameters")
            .size(31.0)
            .uppercase(true)
            .color(colors::TITLE_TEXT)
            .show(ui);
        ui.add_space(FIELD_GAP + 8.0);

        let draft = self.draft;
        if let Some(font_family) = Select::new("font_family", FontFamily::ALL, draft.font_family)
            .title("Font")
            .show(ui)
        {
            self.update(SettingChange::FontFamily(font_family));
        }
        ui.add_space(FIELD_GAP);

        if let Some(font_size) = RadioGroup::new("font_size", FontSize::ALL, draft.font_size)
            .title("Font size")
            .show(ui)
        {
            self.update(SettingChange::FontSize(font_size));
        }
        ui.add_space(FIELD_GAP);

        if let Some(font_color) = Select::new("font_color", FontColor::ALL, draft.font_color)
            .title("Font color")
            .show(ui)
        {
            self.update(SettingChange::FontColor(font_color));
        }

        ui.add(Separator);

        if let Some(background_color) =
            Select::new("background_color", BackgroundColor::ALL, draft.background_color)
                .title("Background color")
                .show(ui)
        {
            self.update(SettingChange::BackgroundColor(background_color));
        }
        ui.add_space(FIELD_GAP);

        if let Some(content_width) =
            Select::new("content_width", ContentWidth::ALL, draft.content_width)
                .title("Content width")
                .show(ui)
        {
            self.update(SettingChange::ContentWidth(content_width));
        }

        let mut action = None;
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
            ui.add_space(FIELD_GAP);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(Button::new("Apply", ButtonKind::Apply)).clicked() {
                    action = Some(self.submit());
                }
                if ui.add(Button::new("Reset", ButtonKind::Clear)).clicked() {
                    action = Some(self.reset());
                }
            });
        });
        action
    }
}
