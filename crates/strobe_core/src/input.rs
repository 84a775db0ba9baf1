//! Pointer input seam
//!
//! The engine never owns a window or an event loop. Whatever does
//! implements [`InputSource`], and the frame driver samples it exactly
//! once per frame into an [`InputSnapshot`] so every node sees the same
//! input state regardless of tree position.

use crate::geometry::Point;

/// Pointer buttons the engine distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Live pointer queries, answered by the embedding window layer.
pub trait InputSource {
    /// Current pointer position in the same coordinate space as layout.
    fn pointer_position(&self) -> Point;

    /// Whether the given button is currently held down.
    fn is_down(&self, button: PointerButton) -> bool;
}

/// Input state sampled at the top of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: Point,
    pub primary_down: bool,
}

impl InputSnapshot {
    pub fn capture(source: &dyn InputSource) -> Self {
        Self {
            pointer: source.pointer_position(),
            primary_down: source.is_down(PointerButton::Primary),
        }
    }
}
