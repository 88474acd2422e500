use virtual_window::{DEFAULT_OVERSCAN, Geometry, WindowInput};

/// Configuration for [`crate::Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    pub count: usize,
    pub geometry: Geometry,
    pub overscan: usize,
    /// Scroll offset applied by `Controller::new` (clamped on use).
    pub initial_offset: f64,
    /// How long after the last scroll event `is_scrolling` stays `true`.
    pub is_scrolling_reset_delay_ms: u64,
}

impl ControllerOptions {
    /// Creates options scrolled to the top with the default overscan.
    pub fn new(count: usize, geometry: Geometry) -> Self {
        Self {
            count,
            geometry,
            overscan: DEFAULT_OVERSCAN,
            initial_offset: 0.0,
            is_scrolling_reset_delay_ms: 150,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: f64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub(crate) fn input(&self, scroll_offset: f64) -> WindowInput {
        WindowInput::new(self.count, self.geometry)
            .with_scroll_offset(scroll_offset)
            .with_overscan(self.overscan)
    }
}
