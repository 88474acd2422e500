//! Adapter utilities for the `virtual-window` crate.
//!
//! The `virtual-window` crate is pure math over explicit inputs. This crate provides the small,
//! framework-neutral shell that UI bindings commonly need around it:
//!
//! - A [`Controller`] that owns the scroll state of one list, coalesces scroll events into at
//!   most one recomputation per frame and memoizes the last window
//! - Scroll anchoring (e.g. rows prepended above the viewport without visual jumps)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod options;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::{Controller, ScrollDirection};
pub use options::ControllerOptions;
