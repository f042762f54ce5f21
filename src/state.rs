//! Root application state: committed settings and the panel's open flag.

use crate::dismiss::{OutsideDismiss, PanelRef};
use crate::document::{Document, DocumentEvent};
use crate::form::{ArticleParamsForm, FormAction};
use crate::options::{ArticleSettings, DEFAULT_ARTICLE_SETTINGS};
use crate::style::StyleVars;
use eframe::egui;
use std::cell::Cell;
use std::rc::Rc;

/// Owns the committed settings and everything that decides whether the
/// settings panel is open.
pub struct AppState {
    settings: ArticleSettings,
    is_open: bool,
    form: ArticleParamsForm,
    document: Document,
    panel: PanelRef,
    dismiss: OutsideDismiss,
    close_requested: Rc<Cell<bool>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let settings = DEFAULT_ARTICLE_SETTINGS;
        Self {
            settings,
            is_open: false,
            form: ArticleParamsForm::new(&settings),
            document: Document::new(),
            panel: PanelRef::new(),
            dismiss: OutsideDismiss::new(),
            close_requested: Rc::new(Cell::new(false)),
        }
    }

    pub fn settings(&self) -> &ArticleSettings {
        &self.settings
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn form(&self) -> &ArticleParamsForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ArticleParamsForm {
        &mut self.form
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Handle to the panel root rectangle, updated by the renderer.
    pub fn panel(&self) -> &PanelRef {
        &self.panel
    }

    /// Records this frame's panel root: the panel together with its toggle,
    /// or the toggle alone while the panel is not drawn.
    pub fn record_panel(&self, panel: Option<egui::Rect>, toggle: egui::Rect) {
        let root = panel.map_or(toggle, |rect| rect.union(toggle));
        self.panel.set(root);
    }

    /// Style variables for the committed settings.
    pub fn style_vars(&self) -> StyleVars {
        StyleVars::from_settings(&self.settings)
    }

    pub fn toggle_sidebar(&mut self) {
        self.is_open = !self.is_open;
        log::info!(
            "Article parameters {}",
            if self.is_open { "opened" } else { "closed" }
        );
    }

    pub fn close_sidebar(&mut self) {
        if self.is_open {
            self.is_open = false;
            log::info!("Article parameters closed");
        }
    }

    pub fn apply_settings(&mut self, settings: ArticleSettings) {
        self.settings = settings;
        log::info!("Applied article settings: {}", self.style_vars().to_inline_style());
        self.close_sidebar();
    }

    /// Restores the default settings in both the committed state and the
    /// form draft, then closes the panel.
    pub fn reset_settings(&mut self) {
        let _ = self.form.reset();
        self.settings = DEFAULT_ARTICLE_SETTINGS;
        log::info!("Article settings reset to defaults");
        self.close_sidebar();
    }

    pub fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Apply(settings) => self.apply_settings(settings),
            FormAction::Reset => self.reset_settings(),
        }
    }

    /// Submits the form as if its apply button was pressed.
    pub fn submit_form(&mut self) {
        let action = self.form.submit();
        self.handle_form_action(action);
    }

    /// Resets the form as if its reset button was pressed.
    pub fn reset_form(&mut self) {
        let action = self.form.reset();
        self.handle_form_action(action);
    }

    /// Delivers this frame's input to document listeners and honours any
    /// close request they raised.
    pub fn dispatch<'a>(&mut self, events: impl IntoIterator<Item = &'a DocumentEvent>) {
        for event in events {
            self.document.dispatch(event);
        }
        if self.close_requested.replace(false) {
            self.close_sidebar();
        }
    }

    /// Attaches or releases the outside-click listener to match the open flag.
    pub fn sync_dismiss(&mut self) {
        let close_requested = Rc::clone(&self.close_requested);
        self.dismiss.sync(&self.document, self.is_open, &self.panel, move || {
            close_requested.set(true);
        });
    }

    pub fn dismiss_attached(&self) -> bool {
        self.dismiss.is_attached()
    }
}
