//! Closes a panel when the user interacts outside of it or presses Escape.

use crate::document::{Document, DocumentEvent, ListenerGuard};
use eframe::egui;
use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to a panel's root rectangle, refreshed every frame it is drawn.
#[derive(Debug, Clone, Default)]
pub struct PanelRef {
    rect: Rc<Cell<Option<egui::Rect>>>,
}

impl PanelRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, rect: egui::Rect) {
        self.rect.set(Some(rect));
    }

    pub fn clear(&self) {
        self.rect.set(None);
    }

    pub fn get(&self) -> Option<egui::Rect> {
        self.rect.get()
    }

    /// Whether `pos` lies inside the panel. An unmounted panel contains nothing.
    pub fn contains(&self, pos: egui::Pos2) -> bool {
        self.rect.get().is_some_and(|rect| rect.contains(pos))
    }
}

/// Owns the document listener for an open panel.
///
/// The listener only exists while the panel is open. It is released when the
/// panel closes or when this value is dropped, whichever happens first.
#[derive(Default)]
pub struct OutsideDismiss {
    guard: Option<ListenerGuard>,
    fired: Rc<Cell<bool>>,
}

impl OutsideDismiss {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings listener registration in line with `is_open`.
    ///
    /// `on_close` runs at most once per attachment, on the first pointer-down
    /// outside `panel` or Escape press. A spent listener is replaced if the
    /// panel is open again by the next sync.
    pub fn sync(
        &mut self,
        document: &Document,
        is_open: bool,
        panel: &PanelRef,
        on_close: impl Fn() + 'static,
    ) {
        if !is_open {
            if self.guard.take().is_some() {
                log::debug!("Outside-click listener detached");
            }
            return;
        }
        if self.guard.is_some() && !self.fired.get() {
            return;
        }

        // Release a spent listener before attaching its replacement.
        self.guard = None;
        let fired = Rc::new(Cell::new(false));
        self.fired = Rc::clone(&fired);
        let panel = panel.clone();
        self.guard = Some(document.add_listener(move |event| {
            if fired.get() || !is_dismissal(event, &panel) {
                return;
            }
            fired.set(true);
            on_close();
        }));
        log::debug!("Outside-click listener attached");
    }

    pub fn is_attached(&self) -> bool {
        self.guard.is_some()
    }
}

fn is_dismissal(event: &DocumentEvent, panel: &PanelRef) -> bool {
    match event {
        DocumentEvent::PointerDown(pos) => !panel.contains(*pos),
        DocumentEvent::KeyDown(key) => *key == egui::Key::Escape,
    }
}
