use alloc::vec::Vec;

use crate::{Geometry, VisibleWindow, WindowItem};

/// The host's rendering capability: turns an item index into something it can paint.
///
/// The engine never knows what an item is. Closures `FnMut(usize) -> R` implement this trait,
/// so most hosts pass a closure over their own collection.
pub trait RenderItem {
    type Output;

    fn render_item(&mut self, index: usize) -> Self::Output;
}

impl<F, R> RenderItem for F
where
    F: FnMut(usize) -> R,
{
    type Output = R;

    fn render_item(&mut self, index: usize) -> R {
        self(index)
    }
}

impl VisibleWindow {
    /// Calls `f` for every materialized index, ascending.
    pub fn for_each_index(&self, mut f: impl FnMut(usize)) {
        for i in self.range() {
            f(i);
        }
    }

    /// Calls `f` for every materialized item with its absolute position.
    ///
    /// `geometry` must be the geometry this window was computed with.
    pub fn for_each_item(&self, geometry: &Geometry, mut f: impl FnMut(WindowItem)) {
        let size = geometry.item_height;
        let mut start = self.render_offset;
        for index in self.range() {
            f(WindowItem { index, start, size });
            start += size;
        }
    }

    /// Collects materialized indexes into `out` (clears `out` first).
    pub fn collect_indexes(&self, out: &mut Vec<usize>) {
        out.clear();
        out.extend(self.range());
    }
}

/// Renders every index of `window` in ascending order into `out` (clears `out` first).
///
/// Reusing `out` across frames avoids a per-frame allocation.
pub fn render_window<R: RenderItem>(
    window: &VisibleWindow,
    renderer: &mut R,
    out: &mut Vec<R::Output>,
) {
    out.clear();
    out.reserve(window.len());
    window.for_each_index(|i| out.push(renderer.render_item(i)));
}
