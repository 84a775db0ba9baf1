//! Directional container and the box-model layout pass

use strobe_core::{Axis, InputSnapshot, Painter, Point, Style};
use tracing::trace;

use crate::node::{Node, NodeList, NodeState};

/// Flow direction for a container's children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// The axis children are distributed along.
    pub fn primary_axis(self) -> Axis {
        match self {
            Direction::Horizontal => Axis::X,
            Direction::Vertical => Axis::Y,
        }
    }
}

/// An interior node that owns its children and distributes them along
/// one axis.
///
/// Layout is two phases. Positions flow top-down: each child learns its
/// absolute origin before it lays out its own subtree, so recursion can
/// run inside the placement loop. Sizes flow bottom-up afterwards: the
/// container sums the final child extents along the primary axis and
/// takes the margin-padded maximum along the cross axis. A child never
/// reads its parent's size, only its position, which is what makes the
/// two phases independently correct at any depth.
pub struct Container {
    state: NodeState,
    children: NodeList,
    direction: Direction,
}

impl Container {
    pub fn new(children: NodeList, direction: Direction, style: Style) -> Self {
        Self {
            state: NodeState::new(style),
            children,
            direction,
        }
    }

    pub fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }
}

impl Node for Container {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn describe(&self) -> String {
        format!("Container ({:?})", self.direction)
    }

    fn layout(&mut self) {
        // An empty container does no work and keeps its zero-size rect.
        if self.children.is_empty() {
            return;
        }

        let primary = self.direction.primary_axis();
        let cross = primary.cross();
        let padding = self.state.style.padding;
        let origin_cross = self.state.rect.coord(cross);

        // Phase 1: place each child, then let it lay out its subtree
        // before the cursor moves past it.
        let mut cursor = self.state.rect.coord(primary)
            + padding
            + self.children[0].state().style.margin;

        for child in &mut self.children {
            let margin = child.state().style.margin;
            child.state_mut().rect.set_coord(primary, cursor);
            child
                .state_mut()
                .rect
                .set_coord(cross, origin_cross + padding + margin);
            child.layout();
            cursor += child.state().rect.extent(primary) + 2.0 * margin;
        }

        // Phase 2: size self from the now-final child extents.
        let mut primary_extent = 0.0;
        let mut cross_extent = 0.0f32;
        for child in &self.children {
            let state = child.state();
            let margin = state.style.margin;
            primary_extent += state.rect.extent(primary) + 2.0 * margin;
            cross_extent = cross_extent.max(state.rect.extent(cross) + 2.0 * margin);
        }
        self.state
            .rect
            .set_extent(primary, primary_extent + 2.0 * padding);
        self.state
            .rect
            .set_extent(cross, cross_extent + 2.0 * padding);

        trace!(
            direction = ?self.direction,
            children = self.children.len(),
            rect = %self.state.rect,
            "container laid out"
        );
    }

    fn handle_input(&mut self, input: &InputSnapshot) {
        for child in &mut self.children {
            child.handle_input(input);
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        self.state
            .paint_background(painter, self.state.style.color_bg);
        for child in &self.children {
            child.draw(painter);
        }
    }

    fn debug_hit_test(&mut self, pointer: Point) -> bool {
        // Children get the first claim, in order, and the first hit ends
        // the search. Only an unclaimed pointer can select the container
        // itself (over its padding, say).
        let claimed = self
            .children
            .iter_mut()
            .any(|child| child.debug_hit_test(pointer));

        if claimed {
            return true;
        }

        let hit = self.state.rect.contains(pointer);
        self.state.hit = hit;
        hit
    }

    fn visit_children(&self, visit: &mut dyn FnMut(&dyn Node)) {
        for child in &self.children {
            visit(&**child);
        }
    }

    fn visit_children_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Node)) {
        for child in &mut self.children {
            visit(&mut **child);
        }
    }
}
