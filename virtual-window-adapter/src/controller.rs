use alloc::vec::Vec;
use core::cmp;

use virtual_window::{
    Align, FrameState, Geometry, RenderItem, ScrollState, VisibleWindow, WindowError, WindowInput,
    clamp_scroll_offset, compute_window, render_window, scroll_offset_for_index_aligned,
};

use crate::ControllerOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A framework-neutral controller that owns the mutable scroll state of one list.
///
/// The windowing math itself is stateless; this type is the effectful shell around it. Adapters
/// drive it by calling:
/// - `on_scroll` / `set_viewport_height` / `set_count` when UI events occur
/// - `tick(now_ms)` once per frame, which coalesces all events since the previous tick into at
///   most one window recomputation and runs `is_scrolling` debouncing
///
/// The last window is memoized keyed on its inputs, so asking for it repeatedly is free.
#[derive(Clone, Debug)]
pub struct Controller {
    options: ControllerOptions,
    scroll_offset: f64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,
    dirty: bool,
    cached: Option<(WindowInput, VisibleWindow)>,
}

impl Controller {
    /// Creates a controller, rejecting invalid geometry up front.
    pub fn new(options: ControllerOptions) -> Result<Self, WindowError> {
        options.geometry.validate_for(options.count)?;
        vdebug!(
            count = options.count,
            overscan = options.overscan,
            item_height = options.geometry.item_height,
            viewport_height = options.geometry.viewport_height,
            "Controller::new"
        );
        let scroll_offset =
            clamp_scroll_offset(options.initial_offset, options.count, &options.geometry);
        Ok(Self {
            options,
            scroll_offset,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            dirty: true,
            cached: None,
        })
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn geometry(&self) -> Geometry {
        self.options.geometry
    }

    /// The last offset reported by the host (or applied by a command), unclamped.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// The scroll offset the window is actually computed from.
    pub fn clamped_scroll_offset(&self) -> f64 {
        clamp_scroll_offset(self.scroll_offset, self.options.count, &self.options.geometry)
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Whether inputs changed since the window was last computed.
    pub fn needs_recompute(&self) -> bool {
        self.dirty
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.dirty = true;
    }

    /// Replaces the geometry. Invalid geometry is stored and reported by the next `window`/`tick`
    /// so the host never renders with stale heights.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        if self.options.geometry == geometry {
            return;
        }
        self.options.geometry = geometry;
        self.dirty = true;
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        let mut geometry = self.options.geometry;
        geometry.viewport_height = viewport_height;
        self.set_geometry(geometry);
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.dirty = true;
    }

    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.options.is_scrolling_reset_delay_ms = delay_ms;
    }

    /// Call this when the UI reports a scroll offset change (e.g. wheel, drag, inertia).
    ///
    /// Out-of-range offsets are kept as reported and clamped when the window is computed.
    pub fn on_scroll(&mut self, offset: f64, now_ms: u64) {
        vtrace!(offset, now_ms, "on_scroll");
        self.set_scroll_offset(offset);
        self.last_scroll_event_ms = Some(now_ms);
        self.is_scrolling = true;
    }

    /// Resets `is_scrolling` once no scroll event arrived for the configured delay.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        if self.scroll_offset.to_bits() == offset.to_bits() {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.partial_cmp(&prev) {
            Some(cmp::Ordering::Greater) => Some(ScrollDirection::Forward),
            Some(cmp::Ordering::Less) => Some(ScrollDirection::Backward),
            _ => self.scroll_direction,
        };
        self.dirty = true;
    }

    /// Sets the scroll offset clamped into the valid range, without marking a scroll gesture.
    pub fn set_scroll_offset_clamped(&mut self, offset: f64) -> f64 {
        let clamped = clamp_scroll_offset(offset, self.options.count, &self.options.geometry);
        self.set_scroll_offset(clamped);
        clamped
    }

    /// Advances the controller by one frame.
    ///
    /// Runs `is_scrolling` debouncing, then recomputes the window if anything changed since the
    /// previous tick. Returns the new window only when it differs from the last one handed out.
    pub fn tick(&mut self, now_ms: u64) -> Result<Option<VisibleWindow>, WindowError> {
        self.update_scrolling(now_ms);
        if !self.dirty {
            return Ok(None);
        }
        let prev = self.cached.map(|(_, w)| w);
        let next = self.window()?;
        Ok((prev != Some(next)).then_some(next))
    }

    /// Returns the current window, recomputing only when its inputs changed.
    pub fn window(&mut self) -> Result<VisibleWindow, WindowError> {
        // Keyed on the clamped offset: never NaN, and overscroll past either end reuses the memo.
        let input = self.options.input(self.clamped_scroll_offset());
        if let Some((cached_input, window)) = self.cached {
            if cached_input == input {
                self.dirty = false;
                return Ok(window);
            }
        }
        let window = match compute_window(&input) {
            Ok(window) => window,
            Err(err) => {
                // The host drops its frame on error, so the next good window must be handed out.
                self.cached = None;
                return Err(err);
            }
        };
        vtrace!(
            start_index = window.start_index,
            end_index = window.end_index,
            "window recomputed"
        );
        self.cached = Some((input, window));
        self.dirty = false;
        Ok(window)
    }

    #[cfg(test)]
    pub(crate) fn memo_input(&self) -> Option<WindowInput> {
        self.cached.map(|(input, _)| input)
    }

    /// Computes the current window and renders it through `renderer` into `out`.
    pub fn render<R: RenderItem>(
        &mut self,
        renderer: &mut R,
        out: &mut Vec<R::Output>,
    ) -> Result<VisibleWindow, WindowError> {
        let window = self.window()?;
        render_window(&window, renderer, out);
        Ok(window)
    }

    /// Computes and applies a scroll-to-index command (no animation).
    ///
    /// Returns the clamped offset the host must apply to its scroll container. An index outside
    /// `0..count` leaves the scroll state untouched.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Result<f64, WindowError> {
        let offset = scroll_offset_for_index_aligned(
            index,
            self.options.count,
            &self.options.geometry,
            align,
            self.scroll_offset,
        )?;
        vdebug!(index, offset, "scroll_to_index");
        self.set_scroll_offset(offset);
        Ok(offset)
    }

    /// Returns a combined snapshot of geometry + scroll state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            geometry: self.options.geometry,
            scroll: ScrollState {
                offset: self.scroll_offset,
                is_scrolling: self.is_scrolling,
            },
        }
    }

    /// Restores geometry + scroll state from a previously captured snapshot.
    ///
    /// When `frame.scroll.is_scrolling` is `true`, this updates the internal scrolling timers as
    /// if a scroll event happened at `now_ms`.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        self.set_geometry(frame.geometry);
        if frame.scroll.is_scrolling {
            self.on_scroll(frame.scroll.offset, now_ms);
            return;
        }
        self.set_scroll_offset(frame.scroll.offset);
        self.set_is_scrolling(false);
    }
}
