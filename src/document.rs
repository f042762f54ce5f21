//! Document-scoped input listeners.
//!
//! egui hands us raw input once per frame; [`Document`] rebroadcasts the
//! interesting parts to whoever registered a listener. Registration hands
//! back a [`ListenerGuard`] and the listener stays attached exactly as long
//! as that guard is alive.

use eframe::egui;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Input events delivered to document listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentEvent {
    /// A pointer button went down at the given screen position.
    PointerDown(egui::Pos2),
    /// A key was pressed (repeats excluded).
    KeyDown(egui::Key),
}

impl DocumentEvent {
    /// Translates a raw egui event, ignoring everything listeners don't care about.
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::PointerButton {
                pos, pressed: true, ..
            } => Some(Self::PointerDown(*pos)),
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => Some(Self::KeyDown(*key)),
            _ => None,
        }
    }
}

/// Translates a frame's raw input for document listeners.
///
/// While a popup such as an open select list is showing, Escape belongs to
/// the popup and is not delivered.
pub fn translate_events(events: &[egui::Event], popup_open: bool) -> Vec<DocumentEvent> {
    events
        .iter()
        .filter_map(DocumentEvent::from_egui)
        .filter(|event| !(popup_open && *event == DocumentEvent::KeyDown(egui::Key::Escape)))
        .collect()
}

type Listener = Rc<RefCell<dyn FnMut(&DocumentEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// Single-threaded listener registry standing in for the page document.
#[derive(Clone, Default)]
pub struct Document {
    registry: Rc<RefCell<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `listener` until the returned guard is dropped.
    pub fn add_listener(&self, listener: impl FnMut(&DocumentEvent) + 'static) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every attached listener.
    ///
    /// Listeners may attach or detach other listeners while running; one
    /// detached mid-dispatch is not invoked.
    pub fn dispatch(&self, event: &DocumentEvent) {
        let snapshot: Vec<(u64, Listener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            // A listener that re-dispatches into itself is skipped.
            if let Ok(mut listener) = listener.try_borrow_mut() {
                (&mut *listener)(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a document listener attached; dropping it detaches the listener.
#[must_use = "the listener is detached as soon as the guard is dropped"]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
