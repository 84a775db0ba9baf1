//! Pressable leaf with hover and press feedback

use strobe_core::{Color, InputSnapshot, Painter, Size, Style};

use crate::node::{Node, NodeState};

const BUTTON_WIDTH: f32 = 500.0;
const BUTTON_HEIGHT: f32 = 100.0;

/// Interaction states a button can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

/// A fixed-size pressable rect. The interaction state is recomputed from
/// scratch from each frame's input snapshot; since the tree is rebuilt
/// every frame there is no edge detection and no carried state, just the
/// pointer's relationship to the rect right now.
pub struct Button {
    state: NodeState,
    button_state: ButtonState,
}

impl Button {
    pub fn new(style: Style) -> Self {
        let mut state = NodeState::new(style);
        state.rect.size = Size::new(BUTTON_WIDTH, BUTTON_HEIGHT);
        Self {
            state,
            button_state: ButtonState::Idle,
        }
    }

    pub fn button_state(&self) -> ButtonState {
        self.button_state
    }

    fn fill_color(&self) -> Color {
        match self.button_state {
            ButtonState::Idle => self.state.style.color_bg,
            ButtonState::Hovered => self.state.style.color_hover,
            ButtonState::Pressed => self.state.style.color_press,
        }
    }
}

impl Node for Button {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn describe(&self) -> String {
        format!("Button {}", self.state.rect)
    }

    fn handle_input(&mut self, input: &InputSnapshot) {
        self.button_state = if !self.state.rect.contains(input.pointer) {
            ButtonState::Idle
        } else if input.primary_down {
            ButtonState::Pressed
        } else {
            ButtonState::Hovered
        };
    }

    fn draw(&self, painter: &mut dyn Painter) {
        self.state.paint_background(painter, self.fill_color());
    }
}
