//! Style variables exposed by the article container and their resolution
//! into concrete egui styling.

use crate::options::{ArticleSettings, FontFamily, SettingOption};
use eframe::egui::{self, Color32};
use thiserror::Error;

pub const FONT_FAMILY_VAR: &str = "--font-family";
pub const FONT_SIZE_VAR: &str = "--font-size";
pub const FONT_COLOR_VAR: &str = "--font-color";
pub const CONTAINER_WIDTH_VAR: &str = "--container-width";
pub const BG_COLOR_VAR: &str = "--bg-color";

/// Named style variables set on the article container, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleVars {
    vars: [(&'static str, &'static str); 5],
}

impl StyleVars {
    pub fn from_settings(settings: &ArticleSettings) -> Self {
        Self {
            vars: [
                (FONT_FAMILY_VAR, settings.font_family.value()),
                (FONT_SIZE_VAR, settings.font_size.value()),
                (FONT_COLOR_VAR, settings.font_color.value()),
                (CONTAINER_WIDTH_VAR, settings.content_width.value()),
                (BG_COLOR_VAR, settings.background_color.value()),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.vars
            .iter()
            .find(|(var, _)| *var == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.vars.iter().copied()
    }

    /// Renders the variables as an inline style declaration list.
    pub fn to_inline_style(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn require(&self, name: &'static str) -> Result<&'static str, StyleError> {
        self.get(name).ok_or(StyleError::MissingVar(name))
    }
}

/// Errors raised while consuming style variables.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StyleError {
    #[error("style variable {0} is not set")]
    MissingVar(&'static str),
    #[error("unknown font stack '{0}'")]
    UnknownFontFamily(String),
    #[error("invalid length '{value}' for {name}")]
    InvalidLength { name: &'static str, value: String },
    #[error("invalid color '{value}' for {name}")]
    InvalidColor { name: &'static str, value: String },
}

/// Concrete styling for the article preview, resolved from [`StyleVars`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleStyle {
    pub font_family: egui::FontFamily,
    pub font_size: f32,
    pub text_color: Color32,
    pub background: Color32,
    pub max_width: f32,
}

impl ArticleStyle {
    pub fn resolve(vars: &StyleVars) -> Result<Self, StyleError> {
        let family_token = vars.require(FONT_FAMILY_VAR)?;
        let family = FontFamily::from_value(family_token)
            .ok_or_else(|| StyleError::UnknownFontFamily(family_token.to_owned()))?;

        Ok(Self {
            font_family: egui_font_family(family),
            font_size: parse_px(FONT_SIZE_VAR, vars.require(FONT_SIZE_VAR)?)?,
            text_color: parse_color(FONT_COLOR_VAR, vars.require(FONT_COLOR_VAR)?)?,
            background: parse_color(BG_COLOR_VAR, vars.require(BG_COLOR_VAR)?)?,
            max_width: parse_px(CONTAINER_WIDTH_VAR, vars.require(CONTAINER_WIDTH_VAR)?)?,
        })
    }

    /// Font at the article's base size, scaled by `scale`.
    pub fn font_id(&self, scale: f32) -> egui::FontId {
        egui::FontId::new(self.font_size * scale, self.font_family.clone())
    }
}

/// Named egui family registered for a font option.
pub fn egui_font_family(family: FontFamily) -> egui::FontFamily {
    egui::FontFamily::Name(family.label().into())
}

fn parse_px(name: &'static str, value: &str) -> Result<f32, StyleError> {
    value
        .strip_suffix("px")
        .and_then(|number| number.parse::<f32>().ok())
        .filter(|px| px.is_finite() && *px > 0.0)
        .ok_or_else(|| StyleError::InvalidLength {
            name,
            value: value.to_owned(),
        })
}

fn parse_color(name: &'static str, value: &str) -> Result<Color32, StyleError> {
    Color32::from_hex(value).map_err(|_| StyleError::InvalidColor {
        name,
        value: value.to_owned(),
    })
}
