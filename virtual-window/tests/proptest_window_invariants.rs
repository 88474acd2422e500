//! Property-based invariant tests for the windowing engine.
//!
//! 1. Indexes are always bounded: `0 <= start <= end <= count`.
//! 2. The materialized count never exceeds `max_materialized`, for any `count`.
//! 3. Identical inputs yield bit-identical windows.
//! 4. Scrolled to the bottom, the last item is always materialized.
//! 5. A viewport taller than the content materializes everything.
//! 6. Offsets far outside the scroll range behave like the nearest bound.
//! 7. Scroll-to-index offsets stay within `0..=max_scroll_offset`.

use proptest::prelude::*;
use virtual_window::{
    Geometry, VisibleWindow, WindowError, WindowInput, compute_window, max_materialized,
    max_scroll_offset, scroll_offset_for_index,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn geometry_strategy() -> impl Strategy<Value = Geometry> {
    (0.5f64..500.0, 1.0f64..5_000.0).prop_map(|(item, view)| Geometry::new(item, view))
}

fn wild_offset_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e15f64..1.0e15,
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(f64::NAN),
        Just(-0.0),
    ]
}

fn run(count: usize, g: Geometry, offset: f64, overscan: usize) -> VisibleWindow {
    let input = WindowInput::new(count, g)
        .with_scroll_offset(offset)
        .with_overscan(overscan);
    compute_window(&input).expect("valid geometry")
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Bounds and materialized count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn indexes_stay_in_bounds(
        count in 0usize..2_000_000,
        g in geometry_strategy(),
        offset in wild_offset_strategy(),
        overscan in 0usize..64,
    ) {
        let w = run(count, g, offset, overscan);
        prop_assert!(w.start_index <= w.end_index, "{:?}", w);
        prop_assert!(w.end_index <= count, "{:?} count={}", w, count);
        prop_assert!(w.render_offset >= 0.0);
        prop_assert!(w.render_offset <= w.total_content_height);
    }

    #[test]
    fn materialized_count_is_bounded_by_viewport(
        count in 0usize..2_000_000,
        g in geometry_strategy(),
        offset in wild_offset_strategy(),
        overscan in 0usize..64,
    ) {
        let w = run(count, g, offset, overscan);
        let bound = max_materialized(&g, overscan).unwrap();
        prop_assert!(w.len() <= bound, "len={} bound={} {:?}", w.len(), bound, w);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn recomputation_is_idempotent(
        count in 0usize..100_000,
        g in geometry_strategy(),
        offset in -1.0e7f64..1.0e7,
        overscan in 0usize..16,
    ) {
        let a = run(count, g, offset, overscan);
        let b = run(count, g, offset, overscan);
        prop_assert_eq!(a.start_index, b.start_index);
        prop_assert_eq!(a.end_index, b.end_index);
        prop_assert_eq!(a.render_offset.to_bits(), b.render_offset.to_bits());
        prop_assert_eq!(a.total_content_height.to_bits(), b.total_content_height.to_bits());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Boundaries
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bottom_includes_last_item(
        count in 1usize..1_000_000,
        g in geometry_strategy(),
        overscan in 0usize..8,
    ) {
        let w = run(count, g, max_scroll_offset(count, &g), overscan);
        prop_assert_eq!(w.end_index, count);
        prop_assert!(!w.is_empty());
    }

    #[test]
    fn short_content_materializes_everything(
        item in 1.0f64..50.0,
        count in 0usize..50,
        extra in 0.0f64..1_000.0,
        offset in wild_offset_strategy(),
        overscan in 0usize..4,
    ) {
        let g = Geometry::new(item, count as f64 * item + extra + 1.0);
        let w = run(count, g, offset, overscan);
        prop_assert_eq!(w.start_index, 0);
        prop_assert_eq!(w.end_index, count);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Clamping of wild offsets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_outside_range_match_nearest_bound(
        count in 1usize..100_000,
        g in geometry_strategy(),
        beyond in 1.0f64..1.0e12,
        overscan in 0usize..8,
    ) {
        let max = max_scroll_offset(count, &g);
        prop_assert_eq!(run(count, g, -beyond, overscan), run(count, g, 0.0, overscan));
        prop_assert_eq!(run(count, g, max + beyond, overscan), run(count, g, max, overscan));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Scroll-to-index
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_to_index_is_clamped_or_rejected(
        count in 0usize..100_000,
        index in 0usize..200_000,
        g in geometry_strategy(),
    ) {
        match scroll_offset_for_index(index, count, &g) {
            Ok(off) => {
                prop_assert!(index < count);
                prop_assert!(off >= 0.0 && off <= max_scroll_offset(count, &g));
            }
            Err(err) => {
                prop_assert!(index >= count);
                prop_assert_eq!(err, WindowError::IndexOutOfRange { index, count });
            }
        }
    }

    #[test]
    fn scroll_to_index_brings_item_into_window(
        count in 1usize..100_000,
        seed in any::<usize>(),
        g in geometry_strategy(),
    ) {
        let index = seed % count;
        let off = scroll_offset_for_index(index, count, &g).unwrap();
        let w = run(count, g, off, 0);
        prop_assert!(w.contains(index), "index={} {:?}", index, w);
    }
}
