//! Strobe Application Driver
//!
//! Ties the pieces of a frame together: build the tree, lay it out,
//! route input, hit-test for the debug overlay, paint, report, discard.
//!
//! # Example
//!
//! ```
//! use strobe_app::prelude::*;
//!
//! let mut app = App::new(AppConfig::default());
//! let mut recorder = PaintRecorder::new();
//!
//! let report = app.frame(&mut recorder, &FixedInput::at(120.0, 40.0), |ui| {
//!     ui.horizontal(Style::new().padding(15.0), |ui| {
//!         ui.label("hello", Style::new());
//!         ui.button(Style::new().bg(Color::GRAY));
//!     });
//! });
//!
//! assert_eq!(report.node_count, 4);
//! assert!(report.hit.is_some(), "the pointer rests on the label");
//! ```

mod driver;
mod error;
mod fonts;
mod headless;


pub use driver::{App, AppConfig, FrameReport};
pub use error::{AppError, Result};
pub use fonts::{EstimatedMeasurer, FontMeasurer};
pub use headless::{run_frames, FixedInput, ScriptedInput};

// Re-export the tree API for convenience
pub use strobe_layout::{build_root, hit_description, tree_to_string, Node, Ui};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::driver::{App, AppConfig, FrameReport};
    pub use crate::error::{AppError, Result};
    pub use crate::fonts::{EstimatedMeasurer, FontMeasurer};
    pub use crate::headless::{run_frames, FixedInput, ScriptedInput};

    // Tree building
    pub use strobe_layout::{
        build_root, hit_description, tree_to_string, Button, ButtonState, Container, Direction,
        Label, Node, Panel, Ui,
    };

    // Core types
    pub use strobe_core::{
        Color, InputSnapshot, InputSource, PaintOp, PaintRecorder, Painter, Point, PointerButton,
        Rect, Size, Style, TextMeasurer,
    };
}
