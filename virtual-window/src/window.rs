use core::ops::Range;

use crate::{Align, Geometry, VisibleWindow, WindowError, WindowInput, WindowItem};

/// Computes the window of items to materialize for the given inputs.
///
/// The scroll offset is clamped to `0..=max_scroll_offset` first, so transient out-of-range
/// values from the host (elastic scrolling, resize races) never produce out-of-bounds indexes.
/// The cost is O(1) regardless of `count`.
///
/// Returns [`WindowError::InvalidGeometry`] when a height is not positive and finite; the host
/// must not render with such geometry.
pub fn compute_window(input: &WindowInput) -> Result<VisibleWindow, WindowError> {
    let WindowInput {
        count,
        geometry,
        scroll_offset,
        overscan,
    } = *input;
    geometry.validate_for(count)?;
    if count == 0 {
        return Ok(VisibleWindow::EMPTY);
    }

    let visible = visible_bounds(count, &geometry, scroll_offset);
    let start_index = visible.start.saturating_sub(overscan);
    let end_index = visible.end.saturating_add(overscan).min(count);

    let window = VisibleWindow {
        start_index,
        end_index,
        render_offset: start_index as f64 * geometry.item_height,
        total_content_height: count as f64 * geometry.item_height,
    };
    vtrace!(
        count,
        scroll_offset,
        overscan,
        start_index,
        end_index,
        "compute_window"
    );
    Ok(window)
}

/// Same as [`compute_window`], but without overscan: only the items intersecting the viewport.
pub fn visible_range(input: &WindowInput) -> Result<Range<usize>, WindowError> {
    compute_window(&input.with_overscan(0)).map(|w| w.range())
}

/// The largest meaningful scroll offset: `max(0, count * item_height - viewport_height)`.
pub fn max_scroll_offset(count: usize, geometry: &Geometry) -> f64 {
    let total = count as f64 * geometry.item_height;
    (total - geometry.viewport_height).max(0.0)
}

/// Clamps a live scroll offset into `0..=max_scroll_offset`.
///
/// `NaN` maps to `0`, infinities map to the nearest bound.
pub fn clamp_scroll_offset(offset: f64, count: usize, geometry: &Geometry) -> f64 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max_scroll_offset(count, geometry))
}

/// Upper bound on `VisibleWindow::len` for any collection size:
/// `ceil(viewport_height / item_height) + 2 * overscan + 1`.
pub fn max_materialized(geometry: &Geometry, overscan: usize) -> Result<usize, WindowError> {
    geometry.validate()?;
    Ok(ceil_index(geometry.viewport_height / geometry.item_height)
        .saturating_add(overscan.saturating_mul(2))
        .saturating_add(1))
}

/// Translates a scroll-to-index command into the offset the host must apply.
///
/// Unlike live scroll offsets, an index outside `0..count` is a caller error and is reported as
/// [`WindowError::IndexOutOfRange`].
pub fn scroll_offset_for_index(
    index: usize,
    count: usize,
    geometry: &Geometry,
) -> Result<f64, WindowError> {
    scroll_offset_for_index_aligned(index, count, geometry, Align::Start, 0.0)
}

/// Alignment-aware variant of [`scroll_offset_for_index`].
///
/// `current_offset` is only consulted by [`Align::Auto`].
pub fn scroll_offset_for_index_aligned(
    index: usize,
    count: usize,
    geometry: &Geometry,
    align: Align,
    current_offset: f64,
) -> Result<f64, WindowError> {
    geometry.validate_for(count)?;
    if index >= count {
        vwarn!(index, count, "scroll_offset_for_index: index out of range");
        return Err(WindowError::IndexOutOfRange { index, count });
    }

    let size = geometry.item_height;
    let view = geometry.viewport_height;
    let start = index as f64 * size;
    let end = start + size;

    let target = match align {
        Align::Start => start,
        Align::End => end - view,
        Align::Center => start + size / 2.0 - view / 2.0,
        Align::Auto => {
            let cur = clamp_scroll_offset(current_offset, count, geometry);
            if start >= cur && end <= cur + view {
                cur
            } else if start < cur {
                start
            } else {
                end - view
            }
        }
    };

    Ok(clamp_scroll_offset(target, count, geometry))
}

/// Maps an offset in the scroll container to the item under it.
///
/// Offsets past either end map to the first or last item. Returns `None` for an empty
/// collection.
pub fn index_at_offset(
    offset: f64,
    count: usize,
    geometry: &Geometry,
) -> Result<Option<usize>, WindowError> {
    geometry.validate_for(count)?;
    if count == 0 {
        return Ok(None);
    }
    let offset = if offset.is_nan() { 0.0 } else { offset.max(0.0) };
    Ok(Some(floor_index(offset / geometry.item_height).min(count - 1)))
}

/// Position of item `index`, or `None` when it is outside `0..count`.
pub fn item_at(
    index: usize,
    count: usize,
    geometry: &Geometry,
) -> Result<Option<WindowItem>, WindowError> {
    geometry.validate_for(count)?;
    Ok((index < count).then(|| WindowItem {
        index,
        start: index as f64 * geometry.item_height,
        size: geometry.item_height,
    }))
}

/// First and one-past-last item intersecting the viewport. Requires `count > 0` and valid
/// geometry.
fn visible_bounds(count: usize, geometry: &Geometry, scroll_offset: f64) -> Range<usize> {
    let size = geometry.item_height;
    let view = geometry.viewport_height;
    let offset = clamp_scroll_offset(scroll_offset, count, geometry);

    // Both caps are no-ops in exact arithmetic; they keep float rounding from dropping the
    // last item or exceeding the materialized-count bound.
    let first = floor_index(offset / size).min(count - 1);
    let span = ceil_index(view / size);
    let last = ceil_index((offset + view) / size)
        .min(first.saturating_add(span).saturating_add(1))
        .max(first + 1);

    first..last
}

// `f64::floor`/`ceil` need `std`; these only ever see non-negative quotients.
fn floor_index(q: f64) -> usize {
    q as usize
}

fn ceil_index(q: f64) -> usize {
    let t = q as usize;
    if (t as f64) < q { t.saturating_add(1) } else { t }
}
