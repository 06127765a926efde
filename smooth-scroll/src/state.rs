use crate::Direction;

/// A lightweight, serializable snapshot of a controller's runtime state.
///
/// Useful for debug overlays or for restoring a position across sessions without holding on to
/// the controller.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub scroll: f64,
    pub target_scroll: f64,
    pub limit: f64,
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    pub direction: Direction,
    pub is_moving: bool,
    pub is_scrolling_to: bool,
    pub stopped: bool,
}
