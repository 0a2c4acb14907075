use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::{
    Align, ConfigError, RenderedWindow, ScrollContainer, ScrollSnapshot, ScrollTracker,
    VisibleRange, WindowOptions, WindowParams, WindowRenderer,
};

/// A windowed list component: tracker + calculator + renderer over an owned collection.
///
/// This type does not hold any UI objects. Hosts drive it by:
/// - attaching it to a [`ScrollContainer`] (or feeding offsets via `tracker_mut().on_scroll`)
/// - calling [`Self::view`] whenever they want the current node set
///
/// The visible range is recomputed on every `view`; nothing is cached across calls.
pub struct WindowedList<T, R, F>
where
    F: FnMut(&T, usize) -> R,
{
    items: Vec<T>,
    options: WindowOptions,
    renderer: WindowRenderer,
    tracker: ScrollTracker,
    render_item: F,
    _output: PhantomData<fn() -> R>,
}

impl<T, R, F> WindowedList<T, R, F>
where
    F: FnMut(&T, usize) -> R,
{
    /// Creates a list, rejecting invalid options.
    pub fn new(
        items: impl Into<Vec<T>>,
        options: WindowOptions,
        render_item: F,
    ) -> Result<Self, ConfigError> {
        let item_height = options.checked_item_height()?;
        let items = items.into();
        wdebug!(
            count = items.len(),
            height = options.height,
            item_height = options.item_height,
            overscan = options.overscan,
            "WindowedList::new"
        );
        let tracker = ScrollTracker::new()
            .with_initial_offset(options.initial_offset)
            .with_viewport_height(options.height)
            .with_policy(options.policy);
        let renderer = WindowRenderer::new(item_height)
            .with_class_name(options.class_name.clone());
        Ok(Self {
            items,
            options,
            renderer,
            tracker,
            render_item,
            _output: PhantomData,
        })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ScrollTracker {
        &mut self.tracker
    }

    pub fn attach<C: ScrollContainer + 'static>(&mut self, container: &Rc<C>) {
        self.tracker.attach(container);
    }

    pub fn detach(&mut self) -> bool {
        self.tracker.detach()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.tracker.scroll_offset()
    }

    pub fn viewport_height(&self) -> u32 {
        self.tracker.viewport_height()
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.tracker.snapshot()
    }

    /// Current calculator inputs.
    pub fn params(&self) -> WindowParams {
        WindowParams {
            scroll_offset: self.tracker.scroll_offset(),
            viewport_height: self.tracker.viewport_height(),
            item_height: self.renderer.item_height(),
            item_count: self.items.len(),
            overscan: self.options.overscan,
        }
    }

    pub fn range(&self) -> VisibleRange {
        self.params().range()
    }

    pub fn total_height(&self) -> u64 {
        self.params().total_height()
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        self.params().scroll_to_index_offset(index, align)
    }

    /// Replaces the collection. The scroll offset is kept as-is.
    pub fn set_items(&mut self, items: impl Into<Vec<T>>) {
        self.items = items.into();
        wdebug!(count = self.items.len(), "WindowedList::set_items");
    }

    /// Applies a viewport resize.
    ///
    /// While attached, the container's next notification overwrites this height with its own
    /// viewport height. Hosts resize the container as well.
    pub fn set_height(&mut self, height: u32) {
        self.options.height = height;
        self.tracker.set_viewport_height(height);
    }

    pub fn set_item_height(&mut self, item_height: u32) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        next.item_height = item_height;
        let checked = next.checked_item_height()?;
        self.options = next;
        self.renderer = WindowRenderer::new(checked)
            .with_class_name(self.options.class_name.clone());
        Ok(())
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    /// Computes the current range and renders it.
    pub fn view(&mut self) -> RenderedWindow<R> {
        let range = self.range();
        let viewport_height = self.tracker.viewport_height();
        self.renderer
            .render(&self.items, range, viewport_height, &mut self.render_item)
    }
}

impl<T, X, E, F> WindowedList<T, Result<X, E>, F>
where
    F: FnMut(&T, usize) -> Result<X, E>,
{
    /// Renders with a fallible row renderer, propagating the first row error unchanged.
    pub fn try_view(&mut self) -> Result<RenderedWindow<X>, E> {
        let range = self.range();
        let viewport_height = self.tracker.viewport_height();
        self.renderer
            .try_render(&self.items, range, viewport_height, &mut self.render_item)
    }
}

impl<T, R, F> fmt::Debug for WindowedList<T, R, F>
where
    F: FnMut(&T, usize) -> R,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedList")
            .field("count", &self.items.len())
            .field("options", &self.options)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}
