use thiserror::Error;

/// Rejected engine configuration.
///
/// Configuration is validated once, when a [`crate::WindowParams`] or
/// [`crate::WindowedList`] is constructed (or reconfigured). A configuration that passed
/// validation can never make the window calculation divide by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Rows must have a positive height.
    #[error("item height must be greater than zero")]
    ZeroItemHeight,
}

/// A `(start, end)` pair with `start > end`, rejected when building a [`crate::VisibleRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("range start {start} is past its end {end}")]
pub struct InvertedRange {
    pub start: usize,
    pub end: usize,
}
