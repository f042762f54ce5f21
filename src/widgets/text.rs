use crate::style::ArticleStyle;
use eframe::egui::{self, Color32, RichText};

/// Size that maps to the article's base font size in dynamic mode.
const BASE_TEXT_SIZE: f32 = 18.0;

/// Text builder mirroring the typographic knobs of the article.
///
/// In dynamic mode the family, color and base size come from the resolved
/// article style and `size` becomes relative to [`BASE_TEXT_SIZE`].
/// Headings stand out by size only.
#[derive(Clone)]
pub struct Text<'a> {
    content: &'a str,
    size: f32,
    italic: bool,
    uppercase: bool,
    align: egui::Align,
    color: Option<Color32>,
    dynamic: Option<&'a ArticleStyle>,
}

impl<'a> Text<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            size: BASE_TEXT_SIZE,
            italic: false,
            uppercase: false,
            align: egui::Align::Min,
            color: None,
            dynamic: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn align(mut self, align: egui::Align) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    /// Takes family, color and base size from the article style.
    pub fn dynamic(mut self, style: &'a ArticleStyle) -> Self {
        self.dynamic = Some(style);
        self
    }

    fn font_and_color(&self) -> (egui::FontId, Option<Color32>) {
        match self.dynamic {
            Some(style) => (
                style.font_id(self.size / BASE_TEXT_SIZE),
                Some(style.text_color),
            ),
            None => (egui::FontId::proportional(self.size), self.color),
        }
    }

    pub fn rich_text(&self) -> RichText {
        let content = if self.uppercase {
            self.content.to_uppercase()
        } else {
            self.content.to_owned()
        };

        let (font, color) = self.font_and_color();
        let mut text = RichText::new(content).font(font);
        if let Some(color) = color {
            text = text.color(color);
        }
        if self.italic {
            text = text.italics();
        }
        text
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let text = self.rich_text();
        ui.with_layout(egui::Layout::top_down(self.align), |ui| {
            ui.add(egui::Label::new(text).wrap())
        })
        .inner
    }
}
