use crate::Geometry;

/// A lightweight, serializable snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    pub is_scrolling: bool,
}

/// A combined snapshot of geometry + scroll state.
///
/// This is useful for restoring a list across frames or sessions without coupling the engine
/// to any specific UI framework.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub geometry: Geometry,
    pub scroll: ScrollState,
}
