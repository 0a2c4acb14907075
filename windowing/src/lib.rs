//! A headless viewport windowing engine for fixed-height rows.
//!
//! For a login-gated listing screen built on top of it, see the `windowing-app` crate.
//!
//! This crate renders a bounded slice of a potentially huge ordered collection: only the rows
//! that intersect the viewport (plus an overscan margin) are materialized, each positioned at
//! its absolute offset inside a spacer sized to the full virtual extent. Render cost depends on
//! the viewport, not on the collection length.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a scroll container (see [`ScrollContainer`]) that reports offset and viewport height
//! - the collection and a `render_item(item, index)` mapping
//!
//! The engine is single-threaded by construction: shared scroll state lives in `Rc`/`Cell`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod calculator;
mod error;
mod list;
mod options;
mod renderer;
mod state;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use calculator::{WindowParams, total_height, window_range};
pub use error::{ConfigError, InvertedRange};
pub use list::WindowedList;
pub use options::{DEFAULT_OVERSCAN, OnChangeCallback, WindowOptions};
pub use renderer::WindowRenderer;
pub use state::ScrollSnapshot;
pub use tracker::{ListenerId, ScrollContainer, ScrollPolicy, ScrollSubscription, ScrollTracker};
pub use types::{
    Align, PositionedNode, RangeInclusiveIter, RenderedWindow, VisibleRange, WindowItem,
};
