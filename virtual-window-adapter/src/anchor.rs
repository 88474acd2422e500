use core::fmt;

use virtual_window::{index_at_offset, item_at};

use crate::Controller;

/// A scroll anchor that can be used to preserve visual position across data changes.
///
/// Typical use cases:
/// - trade/history tables where newer rows are prepended above the viewport
/// - any reorder/replace where the viewport should stay anchored to an item identity
#[derive(Clone, PartialEq)]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// The distance from the anchor item's start to the viewport's scroll offset.
    pub offset_in_viewport: f64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_viewport", &self.offset_in_viewport)
            .finish()
    }
}

/// Captures an anchor for the first visible item.
///
/// `key_for` maps an index of the *current* dataset to a stable identity.
///
/// Returns `None` for an empty collection or invalid geometry.
pub fn capture_first_visible_anchor<K>(
    c: &Controller,
    key_for: impl FnOnce(usize) -> K,
) -> Option<ScrollAnchor<K>> {
    let offset = c.clamped_scroll_offset();
    let geometry = c.geometry();
    let index = index_at_offset(offset, c.count(), &geometry).ok()??;
    let item = item_at(index, c.count(), &geometry).ok()??;
    Some(ScrollAnchor {
        key: key_for(index),
        offset_in_viewport: (offset - item.start).max(0.0),
    })
}

/// Applies a previously captured anchor by adjusting the scroll offset.
///
/// The adapter must provide a `key_to_index` mapping for the *current* dataset, and should
/// update the controller's count before calling this.
///
/// Returns `true` when the anchor was successfully applied.
pub fn apply_anchor<K>(
    c: &mut Controller,
    anchor: &ScrollAnchor<K>,
    key_to_index: impl FnOnce(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    let Ok(Some(item)) = item_at(index, c.count(), &c.geometry()) else {
        return false;
    };
    c.set_scroll_offset_clamped(item.start + anchor.offset_in_viewport);
    true
}

impl Controller {
    pub fn capture_first_visible_anchor<K>(
        &self,
        key_for: impl FnOnce(usize) -> K,
    ) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(self, key_for)
    }

    pub fn apply_anchor<K>(
        &mut self,
        anchor: &ScrollAnchor<K>,
        key_to_index: impl FnOnce(&K) -> Option<usize>,
    ) -> bool {
        apply_anchor(self, anchor, key_to_index)
    }
}
