use alloc::string::String;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::InvertedRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// An inclusive range of row indexes selected for rendering.
///
/// Either empty (no rows), or `start_index <= end_index`.
///
/// With `feature = "serde"`, this serializes as `null` or `[start, end]`; inverted pairs fail
/// to deserialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Option<(usize, usize)>", into = "Option<(usize, usize)>")
)]
pub struct VisibleRange {
    bounds: Option<(usize, usize)>,
}

impl VisibleRange {
    pub const EMPTY: Self = Self { bounds: None };

    /// Creates an inclusive range. Callers must uphold `start_index <= end_index`.
    pub fn new(start_index: usize, end_index: usize) -> Self {
        debug_assert!(
            start_index <= end_index,
            "VisibleRange: start_index > end_index ({start_index} > {end_index})"
        );
        Self {
            bounds: Some((start_index, end_index.max(start_index))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn start_index(&self) -> Option<usize> {
        self.bounds.map(|(s, _)| s)
    }

    /// Last rendered index (inclusive).
    pub fn end_index(&self) -> Option<usize> {
        self.bounds.map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        match self.bounds {
            Some((s, e)) => e - s + 1,
            None => 0,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bounds.is_some_and(|(s, e)| s <= index && index <= e)
    }

    /// The same range as a half-open `start..end`, suitable for slicing.
    pub fn as_exclusive(&self) -> core::ops::Range<usize> {
        match self.bounds {
            Some((s, e)) => s..e.saturating_add(1),
            None => 0..0,
        }
    }

    pub fn iter(&self) -> RangeInclusiveIter {
        RangeInclusiveIter {
            inner: self.bounds.map(|(s, e)| s..=e),
        }
    }
}

impl TryFrom<Option<(usize, usize)>> for VisibleRange {
    type Error = InvertedRange;

    fn try_from(bounds: Option<(usize, usize)>) -> Result<Self, Self::Error> {
        match bounds {
            Some((start, end)) if start > end => Err(InvertedRange { start, end }),
            bounds => Ok(Self { bounds }),
        }
    }
}

impl From<VisibleRange> for Option<(usize, usize)> {
    fn from(range: VisibleRange) -> Self {
        range.bounds
    }
}

impl IntoIterator for VisibleRange {
    type Item = usize;
    type IntoIter = RangeInclusiveIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the indexes of a [`VisibleRange`].
#[derive(Clone, Debug)]
pub struct RangeInclusiveIter {
    inner: Option<RangeInclusive<usize>>,
}

impl Iterator for RangeInclusiveIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(r) => r.size_hint(),
            None => (0, Some(0)),
        }
    }
}

/// Layout of a single windowed row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    /// Offset from the top of the spacer.
    pub top: u64,
    pub height: u32,
}

impl WindowItem {
    pub fn end(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

/// A rendered row, positioned absolutely inside the spacer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionedNode<R> {
    /// Node identity: the absolute index in the collection, never the slice position.
    pub key: usize,
    pub top: u64,
    pub height: u32,
    pub content: R,
}

/// The output of one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedWindow<R> {
    /// Height of the full virtual extent (`count * item_height`).
    pub spacer_height: u64,
    pub viewport_height: u32,
    /// Cosmetic pass-through from the options.
    pub class_name: Option<String>,
    pub range: VisibleRange,
    pub nodes: Vec<PositionedNode<R>>,
}

impl<R> RenderedWindow<R> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.iter().map(|n| n.key)
    }
}
