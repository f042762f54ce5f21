//! Unit tests for the article parameters sidebar: open/close behavior,
//! apply/reset semantics and outside-interaction dismissal.

use article_params::document::DocumentEvent;
use article_params::{
    AppState, BackgroundColor, ContentWidth, DEFAULT_ARTICLE_SETTINGS, FontColor, FontFamily,
    FontSize, FormAction, SettingChange, SettingOption,
};
use eframe::egui;
use rstest::rstest;

/// Panel root spanning the left 640 points of a 1280x800 window.
fn panel_rect() -> egui::Rect {
    egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(640.0, 800.0))
}

/// Opens the panel the way a frame would: toggle, record the panel rect, sync.
fn opened_state() -> AppState {
    let mut state = AppState::new();
    state.toggle_sidebar();
    state.panel().set(panel_rect());
    state.sync_dismiss();
    state
}

/// One frame: deliver input, then reconcile the listener with the open flag.
fn frame(state: &mut AppState, events: &[DocumentEvent]) {
    state.dispatch(events);
    state.sync_dismiss();
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[test]
fn toggle_flips_open_state() {
    let mut state = AppState::new();
    assert!(!state.is_open());

    state.toggle_sidebar();
    assert!(state.is_open());

    state.toggle_sidebar();
    assert!(!state.is_open());
}

// ---------------------------------------------------------------------------
// Apply / reset
// ---------------------------------------------------------------------------

#[test]
fn selecting_font_size_then_submitting_commits_it_and_closes() {
    let mut state = opened_state();
    assert_eq!(state.settings().font_size.label(), "18px");

    let medium = FontSize::from_value("24px").unwrap();
    state.form_mut().update(SettingChange::FontSize(medium));
    state.submit_form();

    assert_eq!(state.settings().font_size.value(), "24px");
    assert!(!state.is_open());
}

#[test]
fn draft_edits_do_not_touch_committed_settings_before_submit() {
    let mut state = opened_state();

    state
        .form_mut()
        .update(SettingChange::FontFamily(FontFamily::Merriweather));

    assert_eq!(*state.settings(), DEFAULT_ARTICLE_SETTINGS);
    assert_eq!(state.form().draft().font_family, FontFamily::Merriweather);
}

#[test]
fn reset_restores_default_background_and_closes() {
    let mut state = opened_state();
    state
        .form_mut()
        .update(SettingChange::BackgroundColor(BackgroundColor::Black));
    state.submit_form();
    assert_eq!(state.settings().background_color, BackgroundColor::Black);

    state.toggle_sidebar();
    state
        .form_mut()
        .update(SettingChange::BackgroundColor(BackgroundColor::Green));
    state.reset_form();

    assert_eq!(
        state.settings().background_color,
        DEFAULT_ARTICLE_SETTINGS.background_color
    );
    assert_eq!(*state.form().draft(), DEFAULT_ARTICLE_SETTINGS);
    assert!(!state.is_open());
}

#[test]
fn reset_action_from_outside_the_form_clears_the_draft() {
    let mut state = opened_state();
    state
        .form_mut()
        .update(SettingChange::BackgroundColor(BackgroundColor::Black));

    state.handle_form_action(FormAction::Reset);

    assert_eq!(*state.settings(), DEFAULT_ARTICLE_SETTINGS);
    assert_eq!(*state.form().draft(), DEFAULT_ARTICLE_SETTINGS);
    assert!(!state.is_open());
}

#[test]
fn style_vars_follow_committed_settings() {
    let mut state = opened_state();
    state
        .form_mut()
        .update(SettingChange::ContentWidth(ContentWidth::Narrow));
    state
        .form_mut()
        .update(SettingChange::FontColor(FontColor::HotPink));
    state.submit_form();

    let vars = state.style_vars();
    assert_eq!(vars.get("--container-width"), Some("948px"));
    assert_eq!(vars.get("--font-color"), Some("#FD24AF"));
    assert_eq!(vars.get("--bg-color"), Some("#FFFFFF"));
}

// ---------------------------------------------------------------------------
// Outside interaction
// ---------------------------------------------------------------------------

#[rstest]
#[case::outside_click(DocumentEvent::PointerDown(egui::pos2(900.0, 300.0)), false)]
#[case::click_on_right_edge(DocumentEvent::PointerDown(egui::pos2(641.0, 10.0)), false)]
#[case::inside_click(DocumentEvent::PointerDown(egui::pos2(320.0, 300.0)), true)]
#[case::escape(DocumentEvent::KeyDown(egui::Key::Escape), false)]
#[case::other_key(DocumentEvent::KeyDown(egui::Key::Enter), true)]
fn interaction_while_open(#[case] event: DocumentEvent, #[case] stays_open: bool) {
    let mut state = opened_state();

    frame(&mut state, &[event]);

    assert_eq!(state.is_open(), stays_open);
    assert_eq!(state.dismiss_attached(), stays_open);
}

#[test]
fn outside_pointer_down_closes_exactly_once() {
    let mut state = opened_state();
    let outside = DocumentEvent::PointerDown(egui::pos2(1000.0, 100.0));

    frame(&mut state, &[outside, outside]);
    assert!(!state.is_open());

    // Another outside click in the next frame must not reopen the panel.
    frame(&mut state, &[outside]);
    assert!(!state.is_open());
}

#[test]
fn pressing_the_toggle_closes_the_panel_exactly_once() {
    let sidebar = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(616.0, 800.0));
    let toggle = egui::Rect::from_min_size(egui::pos2(640.0, 24.0), egui::vec2(52.0, 52.0));

    let mut state = AppState::new();
    state.toggle_sidebar();
    state.record_panel(Some(sidebar), toggle);
    state.sync_dismiss();

    // The press lands on the toggle, which sits outside the sidebar itself.
    frame(&mut state, &[DocumentEvent::PointerDown(toggle.center())]);
    assert!(state.is_open());
    assert_eq!(state.document().listener_count(), 1);

    // The toggle's click handler runs while the same frame renders.
    state.toggle_sidebar();
    state.record_panel(None, toggle);
    state.sync_dismiss();

    assert!(!state.is_open());
    assert_eq!(state.document().listener_count(), 0);
}

#[test]
fn listener_only_exists_while_open() {
    let mut state = AppState::new();
    state.panel().set(panel_rect());

    for _ in 0..3 {
        state.toggle_sidebar();
        state.sync_dismiss();
        assert_eq!(state.document().listener_count(), 1);

        state.toggle_sidebar();
        state.sync_dismiss();
        assert_eq!(state.document().listener_count(), 0);
    }
}

#[test]
fn submit_releases_listener_on_next_sync() {
    let mut state = opened_state();
    assert_eq!(state.document().listener_count(), 1);

    state.submit_form();
    state.sync_dismiss();

    assert_eq!(state.document().listener_count(), 0);
}

#[test]
fn dropping_state_while_open_releases_listener() {
    let state = opened_state();
    let document = state.document().clone();
    assert_eq!(document.listener_count(), 1);

    drop(state);

    assert_eq!(document.listener_count(), 0);
}

#[test]
fn closed_panel_ignores_outside_clicks() {
    let mut state = AppState::new();
    state.panel().set(panel_rect());
    state.sync_dismiss();

    frame(
        &mut state,
        &[DocumentEvent::PointerDown(egui::pos2(1000.0, 100.0))],
    );

    assert!(!state.is_open());
    assert_eq!(state.document().listener_count(), 0);
}
