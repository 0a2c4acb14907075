use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroU32;

use crate::calculator::{item_top, total_height};
use crate::{PositionedNode, RenderedWindow, VisibleRange, WindowItem};

/// Materializes the rows of a [`VisibleRange`] at their absolute positions.
///
/// Every pass builds a fresh node set; nothing is pooled between passes. Node keys are absolute
/// collection indexes, so keyed children survive the window sliding under them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowRenderer {
    item_height: NonZeroU32,
    class_name: Option<String>,
}

impl WindowRenderer {
    pub fn new(item_height: NonZeroU32) -> Self {
        Self {
            item_height,
            class_name: None,
        }
    }

    pub fn with_class_name(mut self, class_name: Option<String>) -> Self {
        self.class_name = class_name;
        self
    }

    pub fn item_height(&self) -> NonZeroU32 {
        self.item_height
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Visits the layout of each row in `range`, in ascending index order, without allocating.
    ///
    /// Indexes past the end of `items` are skipped.
    pub fn for_each_item<'a, T>(
        &self,
        items: &'a [T],
        range: VisibleRange,
        mut f: impl FnMut(WindowItem, &'a T),
    ) {
        let span = range.as_exclusive();
        if span.end > items.len() {
            wwarn!(
                end = span.end,
                count = items.len(),
                "WindowRenderer: range exceeds collection, clipping"
            );
        }
        let end = span.end.min(items.len());
        let height = self.item_height.get();

        for index in span.start..end {
            let item = WindowItem {
                index,
                top: item_top(index, self.item_height),
                height,
            };
            f(item, &items[index]);
        }
    }

    /// Renders `range` with `render_item(item, absolute_index)`.
    pub fn render<T, R>(
        &self,
        items: &[T],
        range: VisibleRange,
        viewport_height: u32,
        mut render_item: impl FnMut(&T, usize) -> R,
    ) -> RenderedWindow<R> {
        let mut nodes = Vec::with_capacity(range.len().min(items.len()));
        self.for_each_item(items, range, |item, value| {
            nodes.push(PositionedNode {
                key: item.index,
                top: item.top,
                height: item.height,
                content: render_item(value, item.index),
            });
        });
        wtrace!(rendered = nodes.len(), count = items.len(), "WindowRenderer::render");
        self.finish(items.len(), range, viewport_height, nodes)
    }

    /// Like [`Self::render`], but stops at the first failing row and returns its error as-is.
    pub fn try_render<T, R, E>(
        &self,
        items: &[T],
        range: VisibleRange,
        viewport_height: u32,
        mut render_item: impl FnMut(&T, usize) -> Result<R, E>,
    ) -> Result<RenderedWindow<R>, E> {
        let span = range.as_exclusive();
        let end = span.end.min(items.len());
        let mut nodes = Vec::with_capacity(end.saturating_sub(span.start));
        for index in span.start..end {
            let content = render_item(&items[index], index)?;
            nodes.push(PositionedNode {
                key: index,
                top: item_top(index, self.item_height),
                height: self.item_height.get(),
                content,
            });
        }
        Ok(self.finish(items.len(), range, viewport_height, nodes))
    }

    fn finish<R>(
        &self,
        count: usize,
        range: VisibleRange,
        viewport_height: u32,
        nodes: Vec<PositionedNode<R>>,
    ) -> RenderedWindow<R> {
        RenderedWindow {
            spacer_height: total_height(count, self.item_height),
            viewport_height,
            class_name: self.class_name.clone(),
            range,
            nodes,
        }
    }
}
