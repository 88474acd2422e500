// Example: a host event loop that forwards scroll events and repaints at most once per frame.
use virtual_window::{Align, Geometry, WindowError};
use virtual_window_adapter::{Controller, ControllerOptions};

fn main() -> Result<(), WindowError> {
    let rows: Vec<String> = (0..10_000).map(|i| format!("order #{i}")).collect();
    let mut c = Controller::new(
        ControllerOptions::new(rows.len(), Geometry::new(28.0, 560.0)).with_overscan(3),
    )?;

    let mut painted = Vec::new();
    let mut wheel = 0.0;
    for frame in 0..10u64 {
        let now_ms = frame * 16;
        // Several wheel events may arrive between two frames.
        for _ in 0..4 {
            wheel += 37.5;
            c.on_scroll(wheel, now_ms);
        }
        if let Some(w) = c.tick(now_ms)? {
            c.render(&mut |i: usize| rows[i].as_str(), &mut painted)?;
            println!(
                "frame {frame}: rows {:?} translate={} extent={} first={:?}",
                w.range(),
                w.render_offset,
                w.total_content_height,
                painted.first()
            );
        }
    }

    let off = c.scroll_to_index(9_999, Align::End)?;
    println!("jump to last row: apply scrollTop={off}");
    Ok(())
}
