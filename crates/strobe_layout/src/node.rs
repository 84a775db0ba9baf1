//! The node capability every tree element implements
//!
//! A node lives for exactly one frame: the builder constructs it, layout
//! writes its rect, input and hit testing update it, drawing reads it,
//! and the whole tree drops before the next frame begins. Nothing here
//! carries state across frames.

use smallvec::SmallVec;
use strobe_core::{Color, InputSnapshot, Painter, Point, Rect, Style};

/// Owned child list. Inline capacity covers typical sibling counts so
/// shallow trees never touch the heap for their frame lists.
pub type NodeList = SmallVec<[Box<dyn Node>; 8]>;

/// State shared by every node variant.
#[derive(Clone, Debug, Default)]
pub struct NodeState {
    /// Bounding rectangle in absolute coordinates. The parent writes the
    /// position during layout; the node itself writes the size.
    pub rect: Rect,
    /// Style copied in when the node was built.
    pub style: Style,
    /// Set when the last hit-test pass landed here. Never cleared across
    /// passes; a fresh tree starts with it false.
    pub hit: bool,
}

impl NodeState {
    pub fn new(style: Style) -> Self {
        Self {
            rect: Rect::ZERO,
            style,
            hit: false,
        }
    }

    /// Background fill shared by every variant.
    ///
    /// A plain rect is drawn unless the style asks for rounding; rounded
    /// fills expand to several primitives on most backends, so zero
    /// radius takes the cheap path. A node flagged by the hit-test pass
    /// is tinted three quarters of the way to white.
    pub fn paint_background(&self, painter: &mut dyn Painter, color: Color) {
        let color = if self.hit {
            color.lerp(Color::WHITE, 0.75)
        } else {
            color
        };

        if self.style.corner_radius == 0.0 {
            painter.fill_rect(self.rect, color);
        } else {
            painter.fill_rounded_rect(self.rect, color, self.style.corner_radius);
        }
    }
}

/// One element of the frame's tree.
///
/// The defaults implement a leaf with no behavior: it keeps whatever
/// size it was built with, draws its background, ignores input, and
/// hit-tests its own rect. [`Container`](crate::Container) overrides the
/// tree-shaped operations.
pub trait Node {
    fn state(&self) -> &NodeState;

    fn state_mut(&mut self) -> &mut NodeState;

    /// One-line summary used by the tree dump.
    fn describe(&self) -> String;

    /// Compute this node's size, and for containers the whole subtree's
    /// rects. Leaves size themselves at build time, so the default does
    /// nothing.
    fn layout(&mut self) {}

    /// React to this frame's sampled input. Runs after layout, so rects
    /// are final.
    fn handle_input(&mut self, _input: &InputSnapshot) {}

    /// Paint this node (not its children; containers chain into their
    /// children themselves so paint order stays parent-then-child).
    fn draw(&self, painter: &mut dyn Painter) {
        let state = self.state();
        state.paint_background(painter, state.style.color_bg);
    }

    /// Mark the single node under the pointer, if any, and report
    /// whether this subtree claimed it.
    fn debug_hit_test(&mut self, pointer: Point) -> bool {
        let hit = self.state().rect.contains(pointer);
        self.state_mut().hit = hit;
        hit
    }

    /// Visit direct children in paint order. Leaves have none.
    fn visit_children(&self, _visit: &mut dyn FnMut(&dyn Node)) {}

    /// Visit direct children mutably, in the same order.
    fn visit_children_mut(&mut self, _visit: &mut dyn FnMut(&mut dyn Node)) {}
}
