use core::ops::Range;

use crate::WindowError;
use crate::error::GeometryField;

/// Default number of extra items materialized beyond each visible edge.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Fixed per-item height plus the viewport extent, in the same linear unit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub item_height: f64,
    pub viewport_height: f64,
}

impl Geometry {
    pub fn new(item_height: f64, viewport_height: f64) -> Self {
        Self {
            item_height,
            viewport_height,
        }
    }

    /// Checks that both heights are strictly positive and finite.
    pub fn validate(&self) -> Result<(), WindowError> {
        check_positive(GeometryField::ItemHeight, self.item_height)?;
        check_positive(GeometryField::ViewportHeight, self.viewport_height)
    }

    /// Validates the heights and that the full content extent of `count` items is finite.
    pub fn validate_for(&self, count: usize) -> Result<(), WindowError> {
        self.validate()?;
        let total = count as f64 * self.item_height;
        if !total.is_finite() {
            vwarn!(count, item_height = self.item_height, "content height overflows");
            return Err(WindowError::InvalidGeometry {
                field: GeometryField::ContentHeight,
                value: total,
            });
        }
        Ok(())
    }
}

fn check_positive(field: GeometryField, value: f64) -> Result<(), WindowError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    vwarn!(%field, value, "rejected geometry");
    Err(WindowError::InvalidGeometry { field, value })
}

/// Item positioning for alignment-aware scroll-to commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Keep the current offset if the item is fully visible, otherwise scroll the least.
    Auto,
}

/// Everything a single [`crate::compute_window`] call depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowInput {
    pub count: usize,
    pub geometry: Geometry,
    pub scroll_offset: f64,
    pub overscan: usize,
}

impl WindowInput {
    /// Creates an input scrolled to the top with [`DEFAULT_OVERSCAN`].
    pub fn new(count: usize, geometry: Geometry) -> Self {
        Self {
            count,
            geometry,
            scroll_offset: 0.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }
}

/// The slice of the collection that must be materialized.
///
/// The host renders `start_index..end_index` in ascending order, translates the block by
/// `render_offset` and sizes the scroll container to `total_content_height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    pub render_offset: f64,
    pub total_content_height: f64,
}

impl VisibleWindow {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
        render_offset: 0.0,
        total_content_height: 0.0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// A materialized item with its absolute position in the scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    pub start: f64,
    pub size: f64,
}

impl WindowItem {
    pub fn end(&self) -> f64 {
        self.start + self.size
    }
}
