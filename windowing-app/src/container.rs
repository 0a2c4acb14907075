use std::cell::{Cell, RefCell};
use std::rc::Rc;

use windowing::{ListenerId, ScrollContainer};

/// An in-process stand-in for a native scroll element.
///
/// Clamps its offset to `[0, content_height - viewport_height]` the way a native container does
/// and notifies listeners after every change.
#[derive(Default)]
pub struct SimulatedContainer {
    offset: Cell<u64>,
    viewport_height: Cell<u32>,
    content_height: Cell<u64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
}

impl SimulatedContainer {
    pub fn new(viewport_height: u32) -> Rc<Self> {
        Rc::new(Self {
            viewport_height: Cell::new(viewport_height),
            ..Self::default()
        })
    }

    pub fn content_height(&self) -> u64 {
        self.content_height.get()
    }

    /// Updates the scrollable extent (e.g. after the spacer changes). Re-clamps the offset.
    pub fn set_content_height(&self, content_height: u64) {
        self.content_height.set(content_height);
        let clamped = self.offset.get().min(self.max_scroll_offset());
        if clamped != self.offset.get() {
            self.offset.set(clamped);
            self.dispatch();
        }
    }

    pub fn scroll_to(&self, offset: u64) {
        self.offset.set(offset.min(self.max_scroll_offset()));
        self.dispatch();
    }

    pub fn scroll_by(&self, delta: i64) {
        let cur = self.offset.get();
        let next = if delta >= 0 {
            cur.saturating_add(delta as u64)
        } else {
            cur.saturating_sub(delta.unsigned_abs())
        };
        self.scroll_to(next);
    }

    pub fn resize(&self, viewport_height: u32) {
        self.viewport_height.set(viewport_height);
        self.offset.set(self.offset.get().min(self.max_scroll_offset()));
        self.dispatch();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn dispatch(&self) {
        let listeners: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for l in listeners {
            l();
        }
    }
}

impl ScrollContainer for SimulatedContainer {
    fn scroll_offset(&self) -> u64 {
        self.offset.get()
    }

    fn viewport_height(&self) -> u32 {
        self.viewport_height.get()
    }

    fn max_scroll_offset(&self) -> u64 {
        self.content_height
            .get()
            .saturating_sub(self.viewport_height.get() as u64)
    }

    fn add_scroll_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(i, _)| *i != id);
        listeners.len() != before
    }
}

impl std::fmt::Debug for SimulatedContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedContainer")
            .field("offset", &self.offset.get())
            .field("viewport_height", &self.viewport_height.get())
            .field("content_height", &self.content_height.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
