use virtual_window::{Geometry, WindowError};
use virtual_window_adapter::{Controller, ControllerOptions};

fn main() -> Result<(), WindowError> {
    // Example: preserve visual scroll position when new rows are prepended to a trade table.
    //
    // The adapter flow is typically:
    // 1) capture an anchor (key + offset_in_viewport) before data changes
    // 2) apply data changes (count)
    // 3) apply the anchor to adjust the scroll offset so the same row stays in the same place
    let mut c = Controller::new(ControllerOptions::new(100, Geometry::new(32.0, 320.0)))?;
    c.on_scroll(1_610.0, 0);

    let key_before = |i: usize| 1000u64 + i as u64;
    let Some(anchor) = c.capture_first_visible_anchor(key_before) else {
        return Ok(());
    };
    println!("before prepend: off={} anchor={anchor:?}", c.scroll_offset());

    // Prepend 10 rows; old rows shift by +10 indexes.
    c.set_count(110);

    // Provide a key -> index mapping for the current dataset (owned by your adapter).
    let ok = c.apply_anchor(&anchor, |k| {
        if (1000..1100).contains(k) {
            Some((*k as usize - 1000) + 10)
        } else {
            None
        }
    });

    println!("after prepend: ok={ok} off={}", c.scroll_offset());
    println!("window={:?}", c.window()?.range());
    Ok(())
}
