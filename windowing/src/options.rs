use alloc::rc::Rc;
use alloc::string::String;
use core::num::NonZeroU32;

use crate::{ConfigError, ScrollPolicy, ScrollSnapshot, WindowParams};

/// Rows rendered beyond each visible edge unless configured otherwise.
pub const DEFAULT_OVERSCAN: usize = 5;

/// A callback fired after the tracker publishes a new scroll state.
pub type OnChangeCallback = Rc<dyn Fn(ScrollSnapshot)>;

/// Configuration for [`crate::WindowedList`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    /// Viewport height of the scroll container.
    pub height: u32,
    /// Uniform row height. Must be positive.
    pub item_height: u32,
    pub overscan: usize,
    /// Cosmetic pass-through; not part of the windowing contract.
    pub class_name: Option<String>,
    /// Scroll offset published before the first container notification.
    pub initial_offset: u64,
    pub policy: ScrollPolicy,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            height: 0,
            item_height: 1,
            overscan: DEFAULT_OVERSCAN,
            class_name: None,
            initial_offset: 0,
            policy: ScrollPolicy::Every,
        }
    }
}

impl WindowOptions {
    pub fn new(height: u32, item_height: u32) -> Self {
        Self {
            height,
            item_height,
            ..Self::default()
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_policy(mut self, policy: ScrollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checked_item_height().map(|_| ())
    }

    pub(crate) fn checked_item_height(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.item_height).ok_or(ConfigError::ZeroItemHeight)
    }

    /// Builds calculator inputs from these options plus the live scroll state.
    pub fn params(
        &self,
        scroll_offset: u64,
        viewport_height: u32,
        item_count: usize,
    ) -> Result<WindowParams, ConfigError> {
        WindowParams::new(
            scroll_offset,
            viewport_height,
            self.item_height,
            item_count,
            self.overscan,
        )
    }
}
