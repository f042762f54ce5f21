//! Option sets for every article setting and the default selection.

use std::fmt;

/// A value drawn from a fixed, ordered option set.
pub trait SettingOption: Copy + PartialEq + fmt::Debug + 'static {
    /// Every option in display order.
    const ALL: &'static [Self];

    /// Human readable label shown in the settings panel.
    fn label(self) -> &'static str;

    /// Underlying style token (a CSS length, color or font stack).
    fn value(self) -> &'static str;

    /// Looks up an option by its style token.
    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.value() == value)
    }

    /// Index of this option within [`SettingOption::ALL`].
    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .unwrap_or_default()
    }
}

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($label:literal, $value:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl SettingOption for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

option_set! {
    /// Typeface used for the article body and headings.
    FontFamily {
        OpenSans => ("Open Sans", "'Open Sans', sans-serif"),
        Ubuntu => ("Ubuntu", "'Ubuntu', sans-serif"),
        CormorantGaramond => ("Cormorant Garamond", "'Cormorant Garamond', serif"),
        DaysOne => ("Days One", "'Days One', sans-serif"),
        Merriweather => ("Merriweather", "'Merriweather', serif"),
    }
}

option_set! {
    /// Base font size of the article text.
    FontSize {
        Small => ("18px", "18px"),
        Medium => ("24px", "24px"),
        Large => ("38px", "38px"),
    }
}

option_set! {
    /// Article text color.
    FontColor {
        Black => ("Black", "#000000"),
        White => ("White", "#FFFFFF"),
        Gray => ("Gray", "#C4C4C4"),
        Pink => ("Pink", "#FEAFE8"),
        HotPink => ("Hot pink", "#FD24AF"),
        Yellow => ("Yellow", "#FFC802"),
        Green => ("Green", "#80D994"),
        LightBlue => ("Light blue", "#6FC1FD"),
        Purple => ("Purple", "#5F36B3"),
    }
}

option_set! {
    /// Page background behind the article.
    BackgroundColor {
        White => ("White", "#FFFFFF"),
        Black => ("Black", "#000000"),
        Gray => ("Gray", "#C4C4C4"),
        Pink => ("Pink", "#FEAFE8"),
        HotPink => ("Hot pink", "#FD24AF"),
        Yellow => ("Yellow", "#FFC802"),
        Green => ("Green", "#80D994"),
        LightBlue => ("Light blue", "#6FC1FD"),
        Purple => ("Purple", "#5F36B3"),
    }
}

option_set! {
    /// Maximum width of the article column.
    ContentWidth {
        Wide => ("Wide", "1394px"),
        Narrow => ("Narrow", "948px"),
    }
}

/// The full set of typographic and layout choices applied to the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleSettings {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: FontColor,
    pub background_color: BackgroundColor,
    pub content_width: ContentWidth,
}

/// Settings the article starts with and returns to on reset.
pub const DEFAULT_ARTICLE_SETTINGS: ArticleSettings = ArticleSettings {
    font_family: FontFamily::OpenSans,
    font_size: FontSize::Small,
    font_color: FontColor::Black,
    background_color: BackgroundColor::White,
    content_width: ContentWidth::Wide,
};

impl Default for ArticleSettings {
    fn default() -> Self {
        DEFAULT_ARTICLE_SETTINGS
    }
}

/// A new value for exactly one settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    FontFamily(FontFamily),
    FontSize(FontSize),
    FontColor(FontColor),
    BackgroundColor(BackgroundColor),
    ContentWidth(ContentWidth),
}

impl ArticleSettings {
    /// Returns a copy with the changed field replaced and every other field kept.
    #[must_use]
    pub fn with(self, change: SettingChange) -> Self {
        match change {
            SettingChange::FontFamily(font_family) => Self {
                font_family,
                ..self
            },
            SettingChange::FontSize(font_size) => Self { font_size, ..self },
            SettingChange::FontColor(font_color) => Self { font_color, ..self },
            SettingChange::BackgroundColor(background_color) => Self {
                background_color,
                ..self
            },
            SettingChange::ContentWidth(content_width) => Self {
                content_width,
                ..self
            },
        }
    }
}
