#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod constants;
mod ui;

use article_params::document::translate_events;
use article_params::style::egui_font_family;
use article_params::{AppState, FontFamily, FormAction, SettingOption};
use assets::{Article, load_article};
use constants::WINDOW_SIZE;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

/// Main application state for the article parameters demo.
pub struct ArticleParamsApp {
    state: AppState,
    article: Article,
    toasts: Toasts,
}

impl ArticleParamsApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        install_fonts(&cc.egui_ctx);

        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let article = match load_article() {
            Ok(article) => article,
            Err(err) => {
                log::error!("Failed to load article: {err}");
                toasts.add(toast(ToastKind::Error, err.to_string(), 10.0));
                Article::placeholder()
            }
        };

        Self {
            state: AppState::new(),
            article,
            toasts,
        }
    }

    /// Feeds this frame's pointer and key presses to document listeners.
    fn dispatch_input(&mut self, ctx: &egui::Context) {
        let popup_open = egui::Popup::is_any_open(ctx);
        let events = ctx.input(|i| translate_events(&i.events, popup_open));
        self.state.dispatch(&events);
    }

    fn handle_form_action(&mut self, action: FormAction) {
        self.state.handle_form_action(action);

        let text = match action {
            FormAction::Apply(_) => "Article parameters applied",
            FormAction::Reset => "Article parameters reset",
        };
        self.toasts.add(toast(ToastKind::Success, text, 3.0));
    }
}

impl eframe::App for ArticleParamsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatch_input(ctx);

        self.show_sidebar(ctx);
        self.show_status_bar(ctx);
        self.show_preview(ctx);

        self.state.sync_dismiss();

        self.toasts.show(ctx);
    }
}

fn toast(kind: ToastKind, text: impl Into<egui::WidgetText>, seconds: f64) -> Toast {
    Toast {
        kind,
        text: text.into(),
        options: ToastOptions::default()
            .duration_in_seconds(seconds)
            .show_icon(true),
        ..Default::default()
    }
}

/// Registers one named family per font option.
///
/// Only the bundled proportional fonts ship with the binary, so every named
/// family falls back to them.
fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let proportional = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    for family in FontFamily::ALL {
        fonts
            .families
            .insert(egui_font_family(*family), proportional.clone());
    }

    ctx.set_fonts(fonts);
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Article Parameters"),
        ..Default::default()
    };

    eframe::run_native(
        "Article Parameters",
        options,
        Box::new(|cc| Ok(Box::new(ArticleParamsApp::new(cc)))),
    )
}
