//! Single-line text leaf

use strobe_core::{Painter, Size, Style, TextMeasurer};

use crate::node::{Node, NodeState};

/// Every label renders at the same size for now. Styling the font is a
/// follow-up once styles grow a text section.
const LABEL_FONT_SIZE: f32 = 50.0;

/// A leaf holding one run of text. It sizes itself when built: height is
/// the font size, width is whatever the measurer reports for the text.
pub struct Label {
    state: NodeState,
    text: String,
    font_size: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, style: Style, fonts: &dyn TextMeasurer) -> Self {
        let text = text.into();
        let mut state = NodeState::new(style);
        state.rect.size = Size::new(fonts.measure(&text, LABEL_FONT_SIZE), LABEL_FONT_SIZE);
        Self {
            state,
            text,
            font_size: LABEL_FONT_SIZE,
        }
    }
}

impl Node for Label {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn describe(&self) -> String {
        format!("Label {} ({})", self.state.rect, self.text)
    }

    fn draw(&self, painter: &mut dyn Painter) {
        self.state
            .paint_background(painter, self.state.style.color_bg);
        painter.draw_text(
            &self.text,
            self.state.rect.origin,
            self.font_size,
            self.state.style.color_text,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_core::{Color, PaintOp, PaintRecorder, Point};

    /// Ten pixels per character, ignoring the font size.
    struct TenPerChar;

    impl TextMeasurer for TenPerChar {
        fn measure(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    #[test]
    fn test_label_sizes_from_measurer() {
        let label = Label::new("foo", Style::new(), &TenPerChar);
        assert_eq!(label.state().rect.width(), 30.0);
        assert_eq!(label.state().rect.height(), LABEL_FONT_SIZE);
    }

    #[test]
    fn test_empty_text_keeps_line_height() {
        let label = Label::new("", Style::new(), &TenPerChar);
        assert_eq!(label.state().rect.width(), 0.0);
        assert_eq!(label.state().rect.height(), LABEL_FONT_SIZE);
    }

    #[test]
    fn test_draw_paints_background_then_text() {
        let label = Label::new("hi", Style::new().bg(Color::BLUE), &TenPerChar);
        let mut recorder = PaintRecorder::new();
        label.draw(&mut recorder);

        assert_eq!(recorder.ops().len(), 2);
        assert!(matches!(recorder.ops()[0], PaintOp::FillRect { .. }));
        match &recorder.ops()[1] {
            PaintOp::DrawText {
                text,
                position,
                size,
                color,
            } => {
                assert_eq!(text, "hi");
                assert_eq!(*position, Point::ZERO);
                assert_eq!(*size, LABEL_FONT_SIZE);
                assert_eq!(*color, Color::WHITE);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_describe_includes_text() {
        let label = Label::new("foo", Style::new(), &TenPerChar);
        assert_eq!(label.describe(), "Label (0, 0) 30x50 (foo)");
    }
}
