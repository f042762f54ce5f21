//! Asset embedding and loading utilities.

use rust_embed::RustEmbed;
use serde::Deserialize;
use thiserror::Error;

const ARTICLE_PATH: &str = "article.ron";

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
/// In release mode, assets are compressed and embedded in the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Errors that can occur when loading the preview article.
#[derive(Error, Debug)]
pub enum ArticleLoadError {
    #[error("article.ron not found in embedded assets")]
    NotFound,
    #[error("invalid UTF-8 in article.ron: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse article.ron: {0}")]
    ParseError(#[from] ron::de::SpannedError),
}

/// Static content rendered in the preview.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: Option<String>,
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Shown when the embedded article can't be loaded.
    pub fn placeholder() -> Self {
        Self {
            title: "Article unavailable".to_owned(),
            subtitle: String::new(),
            sections: Vec::new(),
        }
    }
}

/// Loads the preview article from embedded assets.
pub fn load_article() -> Result<Article, ArticleLoadError> {
    let file = Assets::get(ARTICLE_PATH).ok_or(ArticleLoadError::NotFound)?;
    let ron_string = std::str::from_utf8(&file.data)?;
    Ok(ron::from_str(ron_string)?)
}
