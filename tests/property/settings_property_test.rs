//! Property-based tests for draft editing, submit and reset.
//!
//! These tests verify that single-field edits never disturb the other
//! fields, that submit commits exactly the draft, and that reset always
//! lands on the defaults whatever was edited before.

use article_params::{
    AppState, ArticleSettings, ArticleStyle, BackgroundColor, ContentWidth,
    DEFAULT_ARTICLE_SETTINGS, FontColor, FontFamily, FontSize, SettingChange, SettingOption,
    StyleVars,
};
use proptest::prelude::*;
use proptest::sample::select;

// --- Arbitrary strategies for the option sets ---

fn arb_settings() -> impl Strategy<Value = ArticleSettings> {
    (
        select(FontFamily::ALL),
        select(FontSize::ALL),
        select(FontColor::ALL),
        select(BackgroundColor::ALL),
        select(ContentWidth::ALL),
    )
        .prop_map(
            |(font_family, font_size, font_color, background_color, content_width)| {
                ArticleSettings {
                    font_family,
                    font_size,
                    font_color,
                    background_color,
                    content_width,
                }
            },
        )
}

fn arb_change() -> impl Strategy<Value = SettingChange> {
    prop_oneof![
        select(FontFamily::ALL).prop_map(SettingChange::FontFamily),
        select(FontSize::ALL).prop_map(SettingChange::FontSize),
        select(FontColor::ALL).prop_map(SettingChange::FontColor),
        select(BackgroundColor::ALL).prop_map(SettingChange::BackgroundColor),
        select(ContentWidth::ALL).prop_map(SettingChange::ContentWidth),
    ]
}

/// Field values as option positions, with the changed field masked out.
fn untouched_fields(settings: &ArticleSettings, change: &SettingChange) -> [Option<usize>; 5] {
    let mut fields = [
        Some(settings.font_family.position()),
        Some(settings.font_size.position()),
        Some(settings.font_color.position()),
        Some(settings.background_color.position()),
        Some(settings.content_width.position()),
    ];
    let changed = match change {
        SettingChange::FontFamily(_) => 0,
        SettingChange::FontSize(_) => 1,
        SettingChange::FontColor(_) => 2,
        SettingChange::BackgroundColor(_) => 3,
        SettingChange::ContentWidth(_) => 4,
    };
    fields[changed] = None;
    fields
}

proptest! {
    #[test]
    fn single_field_change_leaves_other_fields(
        settings in arb_settings(),
        change in arb_change(),
    ) {
        let changed = settings.with(change);
        prop_assert_eq!(
            untouched_fields(&settings, &change),
            untouched_fields(&changed, &change)
        );
        prop_assert_eq!(changed.with(change), changed);
    }

    #[test]
    fn submit_commits_the_last_draft(changes in prop::collection::vec(arb_change(), 0..12)) {
        let mut state = AppState::new();
        state.toggle_sidebar();

        let mut expected = DEFAULT_ARTICLE_SETTINGS;
        for change in &changes {
            state.form_mut().update(*change);
            expected = expected.with(*change);
        }
        state.submit_form();

        prop_assert_eq!(*state.settings(), expected);
        prop_assert!(!state.is_open());
    }

    #[test]
    fn reset_always_lands_on_defaults(
        applied in prop::collection::vec(arb_change(), 0..8),
        drafted in prop::collection::vec(arb_change(), 0..8),
    ) {
        let mut state = AppState::new();
        for change in &applied {
            state.form_mut().update(*change);
        }
        state.submit_form();

        state.toggle_sidebar();
        for change in &drafted {
            state.form_mut().update(*change);
        }
        state.reset_form();

        prop_assert_eq!(*state.settings(), DEFAULT_ARTICLE_SETTINGS);
        prop_assert_eq!(*state.form().draft(), DEFAULT_ARTICLE_SETTINGS);
        prop_assert!(!state.is_open());
    }

    #[test]
    fn every_setting_resolves_to_a_style(settings in arb_settings()) {
        let vars = StyleVars::from_settings(&settings);
        prop_assert!(vars.iter().all(|(name, value)| name.starts_with("--") && !value.is_empty()));
        prop_assert!(ArticleStyle::resolve(&vars).is_ok());
    }
}
