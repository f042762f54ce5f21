//! Article parameters: a collapsible settings panel that restyles a preview
//! article through a small set of named style variables.

pub mod colors;
pub mod dismiss;
pub mod document;
pub mod form;
pub mod options;
pub mod state;
pub mod style;
pub mod widgets;

pub use form::{ArticleParamsForm, FormAction};
pub use options::{
    ArticleSettings, BackgroundColor, ContentWidth, DEFAULT_ARTICLE_SETTINGS, FontColor,
    FontFamily, FontSize, SettingChange, SettingOption,
};
pub use state::AppState;
pub use style::{ArticleStyle, StyleError, StyleVars};
