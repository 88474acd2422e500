// Example: minimal usage and scroll-to helper.
use virtual_window::{Geometry, WindowInput, compute_window, scroll_offset_for_index};

fn main() -> Result<(), virtual_window::WindowError> {
    let geometry = Geometry::new(24.0, 480.0);
    let count = 1_000_000;

    let w = compute_window(&WindowInput::new(count, geometry).with_scroll_offset(123_456.0))?;
    println!("total_content_height={}", w.total_content_height);
    println!("window={:?} render_offset={}", w.range(), w.render_offset);

    let off = scroll_offset_for_index(count - 1, count, &geometry)?;
    let w = compute_window(&WindowInput::new(count, geometry).with_scroll_offset(off))?;
    println!("after scroll_to_index: offset={off} window={:?}", w.range());
    Ok(())
}
