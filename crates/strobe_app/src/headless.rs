//! Headless frame running
//!
//! Drives [`App::frame`] without a window: paint lands in a
//! [`PaintRecorder`] and input comes from a fixed or scripted source.
//! Meant for tests and tools that want to watch a tree react to a
//! pointer over several frames.

use strobe_core::{InputSource, PaintRecorder, Point, PointerButton};
use strobe_layout::Ui;

use crate::driver::{App, FrameReport};

/// One unchanging input sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedInput {
    pointer: Point,
    primary_down: bool,
}

impl FixedInput {
    /// Pointer resting at the given position, no buttons down.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pointer: Point::new(x, y),
            primary_down: false,
        }
    }

    /// Same position with the primary button held.
    pub fn pressed(mut self) -> Self {
        self.primary_down = true;
        self
    }
}

impl InputSource for FixedInput {
    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn is_down(&self, button: PointerButton) -> bool {
        matches!(button, PointerButton::Primary) && self.primary_down
    }
}

/// A sequence of input samples, stepped once per frame.
///
/// The script never runs out: once the cursor reaches the last sample
/// it holds there, so a run longer than the script sees the final
/// sample repeated.
pub struct ScriptedInput {
    samples: Vec<FixedInput>,
    cursor: usize,
}

impl ScriptedInput {
    /// Panics if `samples` is empty; a script needs at least one sample.
    pub fn new(samples: Vec<FixedInput>) -> Self {
        assert!(
            !samples.is_empty(),
            "an input script needs at least one sample"
        );
        Self { samples, cursor: 0 }
    }

    /// The sample frames read until the next [`advance`](Self::advance).
    pub fn current(&self) -> FixedInput {
        self.samples[self.cursor]
    }

    /// Step to the next sample, holding at the last one.
    pub fn advance(&mut self) {
        if self.cursor + 1 < self.samples.len() {
            self.cursor += 1;
        }
    }
}

impl InputSource for ScriptedInput {
    fn pointer_position(&self) -> Point {
        self.current().pointer
    }

    fn is_down(&self, button: PointerButton) -> bool {
        self.current().is_down(button)
    }
}

/// Run `frames` frames against a recorder, stepping the script once
/// after each frame. Paint ops are discarded; the reports carry what a
/// headless caller can observe.
pub fn run_frames(
    app: &mut App,
    input: &mut ScriptedInput,
    frames: u32,
    mut build: impl FnMut(&mut Ui<'_>),
) -> Vec<FrameReport> {
    let mut recorder = PaintRecorder::new();
    let mut reports = Vec::with_capacity(frames as usize);
    for _ in 0..frames {
        recorder.clear();
        reports.push(app.frame(&mut recorder, &*input, &mut build));
        input.advance();
    }
    reports
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
