use core::num::NonZeroU32;

use crate::{Align, ConfigError, VisibleRange, WindowItem};

/// Inputs of the window calculation.
///
/// `item_height` is stored as `NonZeroU32`, so a value of this type can never make the
/// calculation divide by zero. Construct it with [`WindowParams::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowParams {
    pub scroll_offset: u64,
    pub viewport_height: u32,
    pub item_height: NonZeroU32,
    pub item_count: usize,
    pub overscan: usize,
}

impl WindowParams {
    /// Validates `item_height` and builds the parameter set.
    pub fn new(
        scroll_offset: u64,
        viewport_height: u32,
        item_height: u32,
        item_count: usize,
        overscan: usize,
    ) -> Result<Self, ConfigError> {
        let item_height = NonZeroU32::new(item_height).ok_or(ConfigError::ZeroItemHeight)?;
        Ok(Self {
            scroll_offset,
            viewport_height,
            item_height,
            item_count,
            overscan,
        })
    }

    pub fn with_scroll_offset(mut self, scroll_offset: u64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn range(&self) -> VisibleRange {
        window_range(self)
    }

    pub fn total_height(&self) -> u64 {
        total_height(self.item_count, self.item_height)
    }

    /// Largest offset a native scroll container would allow for this content.
    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height()
            .saturating_sub(self.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn item(&self, index: usize) -> Option<WindowItem> {
        (index < self.item_count).then(|| WindowItem {
            index,
            top: item_top(index, self.item_height),
            height: self.item_height.get(),
        })
    }

    /// Index of the row covering `offset`, clamped to the last row.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }
        let row = offset / self.item_height.get() as u64;
        let last = (self.item_count - 1) as u64;
        Some(row.min(last) as usize)
    }

    /// Computes the (clamped) scroll offset that brings `index` into view.
    ///
    /// `index` is clamped to the last row. Returns 0 for an empty collection.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.item_count == 0 {
            return 0;
        }
        let index = index.min(self.item_count - 1);
        let top = item_top(index, self.item_height);
        let end = top.saturating_add(self.item_height.get() as u64);
        let view = self.viewport_height as u64;

        let target = match align {
            Align::Start => top,
            Align::End => end.saturating_sub(view),
            Align::Center => {
                let center = top.saturating_add(self.item_height.get() as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if top >= cur && end <= cur_end {
                    cur
                } else if top < cur {
                    top
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }
}

/// Full scrollable extent of `count` rows (saturating).
pub fn total_height(count: usize, item_height: NonZeroU32) -> u64 {
    (count as u64).saturating_mul(item_height.get() as u64)
}

pub(crate) fn item_top(index: usize, item_height: NonZeroU32) -> u64 {
    (index as u64).saturating_mul(item_height.get() as u64)
}

/// Maps scroll/viewport/row parameters to the inclusive range of rows to render.
///
/// ```text
/// start = max(0, floor(scroll_offset / item_height) - overscan)
/// end   = min(count - 1, floor((scroll_offset + viewport_height) / item_height) + overscan)
/// ```
///
/// Pure and stateless. The result is empty iff `item_count == 0`; otherwise
/// `start <= end <= count - 1`, also for offsets past the end of the content.
pub fn window_range(params: &WindowParams) -> VisibleRange {
    let count = params.item_count;
    if count == 0 {
        return VisibleRange::EMPTY;
    }

    let h = params.item_height.get() as u64;
    let overscan = params.overscan as u64;
    let last = (count - 1) as u64;

    let first_visible = params.scroll_offset / h;
    let last_visible = params
        .scroll_offset
        .saturating_add(params.viewport_height as u64)
        / h;

    let end = last_visible.saturating_add(overscan).min(last);
    let start = first_visible.saturating_sub(overscan).min(end);

    VisibleRange::new(start as usize, end as usize)
}
