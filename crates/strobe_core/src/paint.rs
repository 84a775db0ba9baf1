//! Painter seam between the tree and whatever renders it
//!
//! Drawing a frame produces a flat sequence of operations. The engine
//! never talks to a GPU or a framebuffer; it hands each fill and text
//! run to a [`Painter`] and the embedding backend decides what pixels
//! mean. [`PaintRecorder`] is the reference implementation: it records
//! the operations into a buffer, which is also how tests observe draws.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// One recorded draw operation.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// Fill a rectangle with a solid color
    FillRect { rect: Rect, color: Color },
    /// Fill a rounded rectangle with a solid color
    FillRoundedRect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    /// Draw a single run of text
    DrawText {
        text: String,
        position: Point,
        size: f32,
        color: Color,
    },
}

/// Receives draw operations in paint order.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32);
    fn draw_text(&mut self, text: &str, position: Point, size: f32, color: Color);
}

/// A [`Painter`] that buffers operations instead of rendering them.
#[derive(Debug, Default)]
pub struct PaintRecorder {
    ops: Vec<PaintOp>,
}

impl PaintRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations recorded so far, in paint order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the buffer empty.
    pub fn take_ops(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for PaintRecorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.ops.push(PaintOp::FillRoundedRect { rect, color, radius });
    }

    fn draw_text(&mut self, text: &str, position: Point, size: f32, color: Color) {
        self.ops.push(PaintOp::DrawText {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_preserves_order() {
        let mut recorder = PaintRecorder::new();
        recorder.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        recorder.draw_text("hi", Point::new(1.0, 2.0), 14.0, Color::WHITE);

        let ops = recorder.ops();
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], PaintOp::FillRect { .. }));
        assert!(matches!(ops[1], PaintOp::DrawText { .. }));
    }

    #[test]
    fn test_take_ops_drains() {
        let mut recorder = PaintRecorder::new();
        recorder.fill_rounded_rect(Rect::ZERO, Color::BLUE, 4.0);

        let ops = recorder.take_ops();
        assert_eq!(ops.len(), 1);
        assert!(recorder.ops().is_empty(), "take_ops should leave the buffer empty");
    }
}
