//! UI rendering methods for the article parameters application.

use crate::ArticleParamsApp;
use crate::assets::Article;
use crate::constants::{ARTICLE_MARGIN, SIDEBAR_PADDING, SIDEBAR_WIDTH, TOGGLE_MARGIN};
use article_params::colors;
use article_params::widgets::{ArrowButton, Text};
use article_params::ArticleStyle;
use eframe::egui;

impl ArticleParamsApp {
    /// Renders the sliding parameters panel and its toggle, then records the
    /// combined rectangle as the panel root for outside-click detection.
    pub fn show_sidebar(&mut self, ctx: &egui::Context) {
        let is_open = self.state.is_open();

        let panel = egui::SidePanel::left("article_params")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .fill(colors::PANEL_FILL)
                    .inner_margin(SIDEBAR_PADDING),
            )
            .show_animated(ctx, is_open, |ui| self.state.form_mut().show(ui));

        let panel_rect = panel.map(|inner| {
            if let Some(action) = inner.inner {
                self.handle_form_action(action);
            }
            inner.response.rect
        });

        let toggle_left = panel_rect.map_or(0.0, |rect| rect.right());
        let toggle_rect = self.show_toggle(ctx, toggle_left);

        self.state.record_panel(panel_rect, toggle_rect);
    }

    /// Renders the round arrow toggle next to the panel edge.
    fn show_toggle(&mut self, ctx: &egui::Context, left: f32) -> egui::Rect {
        let is_open = self.state.is_open();

        let area = egui::Area::new(egui::Id::new("article_params_toggle"))
            .fixed_pos(egui::pos2(left + TOGGLE_MARGIN, TOGGLE_MARGIN))
            .order(egui::Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| ui.add(ArrowButton::new(is_open)));

        if area.inner.clicked() {
            self.state.toggle_sidebar();
        }

        area.response.rect
    }

    /// Renders the bottom status bar with the live style variables.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Arrow: parameters | Esc or click outside: close");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(self.state.style_vars().to_inline_style());
                });
            });
        });
    }

    /// Renders the article preview styled by the committed style variables.
    pub fn show_preview(&self, ctx: &egui::Context) {
        let style = match ArticleStyle::resolve(&self.state.style_vars()) {
            Ok(style) => style,
            Err(err) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("Failed to apply article style: {err}"));
                    });
                });
                return;
            }
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(style.background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let available = ui.available_width();
                        let width = style
                            .max_width
                            .min(available - 2.0 * ARTICLE_MARGIN)
                            .max(ARTICLE_MARGIN);
                        let side = ((available - width) / 2.0).max(0.0);

                        ui.horizontal_top(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                show_article(ui, &self.article, &style);
                            });
                        });
                    });
            });
    }
}

fn show_article(ui: &mut egui::Ui, article: &Article, style: &ArticleStyle) {
    ui.add_space(96.0);

    Text::new(&article.title)
        .size(45.0)
        .uppercase(true)
        .align(egui::Align::Center)
        .dynamic(style)
        .show(ui);

    if !article.subtitle.is_empty() {
        ui.add_space(12.0);
        Text::new(&article.subtitle)
            .size(22.0)
            .italic(true)
            .align(egui::Align::Center)
            .dynamic(style)
            .show(ui);
    }

    for section in &article.sections {
        ui.add_space(36.0);

        if let Some(heading) = &section.heading {
            Text::new(heading)
                .size(25.0)
                .dynamic(style)
                .show(ui);
            ui.add_space(12.0);
        }

        for paragraph in &section.paragraphs {
            Text::new(paragraph).dynamic(style).show(ui);
            ui.add_space(12.0);
        }
    }

    ui.add_space(96.0);
}
