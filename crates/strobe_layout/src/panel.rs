//! Bare styled rectangle

use strobe_core::{Size, Style};

use crate::node::{Node, NodeState};

/// A leaf with nothing but a background. All behavior is the trait
/// defaults; the size is fixed at build time.
pub struct Panel {
    state: NodeState,
}

impl Panel {
    pub fn new(style: Style, width: f32, height: f32) -> Self {
        let mut state = NodeState::new(style);
        state.rect.size = Size::new(width, height);
        Self { state }
    }
}

impl Node for Panel {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn describe(&self) -> String {
        format!("Panel {}", self.state.rect)
    }
}
