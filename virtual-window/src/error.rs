use core::fmt;

use thiserror::Error;

/// Which geometry input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryField {
    ItemHeight,
    ViewportHeight,
    /// `count * item_height` does not fit in a finite `f64`.
    ContentHeight,
}

impl fmt::Display for GeometryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ItemHeight => "item_height",
            Self::ViewportHeight => "viewport_height",
            Self::ContentHeight => "content_height",
        })
    }
}

/// Errors returned by the windowing operations.
///
/// Out-of-range scroll offsets are not errors: they are clamped.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum WindowError {
    /// A height is zero, negative, NaN or infinite. The host must not render with it.
    #[error("invalid geometry: {field} must be positive and finite (got {value})")]
    InvalidGeometry { field: GeometryField, value: f64 },

    /// A scroll-to-index command named an index outside `0..count`.
    #[error("index {index} out of range for a collection of {count} items")]
    IndexOutOfRange { index: usize, count: usize },
}
