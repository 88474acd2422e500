//! A headless windowing engine for fixed-height virtualized lists.
//!
//! For the stateful scroll controller and anchoring helpers, see the `virtual-window-adapter`
//! crate.
//!
//! Given a collection length, a fixed item height, a viewport height, a scroll offset and an
//! overscan margin, the engine computes which contiguous slice of items must be materialized,
//! where that slice sits inside the scroll container, and how tall the container must be.
//! The number of materialized items is bounded by the viewport, never by the collection size.
//!
//! Every operation is a pure function over its inputs. A UI layer is expected to provide:
//! - the item count and geometry
//! - the current scroll offset
//! - a [`RenderItem`] callback for the materialized indexes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod render;
mod state;
mod types;
mod window;


pub use error::{GeometryField, WindowError};
pub use render::{RenderItem, render_window};
pub use state::{FrameState, ScrollState};
pub use types::{Align, DEFAULT_OVERSCAN, Geometry, VisibleWindow, WindowInput, WindowItem};
pub use window::{
    clamp_scroll_offset, compute_window, index_at_offset, item_at, max_materialized,
    max_scroll_offset, scroll_offset_for_index, scroll_offset_for_index_aligned, visible_range,
};
