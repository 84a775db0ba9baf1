//! Strobe Core
//!
//! The foundational types shared by every Strobe crate:
//!
//! - **Geometry**: points, sizes, rects, and the axis accessors the
//!   direction-generic layout pass runs on
//! - **Styling**: the per-node [`Style`] record with chainable builders
//! - **Collaborator seams**: [`Painter`], [`InputSource`], and
//!   [`TextMeasurer`] traits, so rendering, windowing, and font metrics
//!   stay outside the engine
//!
//! # Example
//!
//! ```rust
//! use strobe_core::{Color, PaintRecorder, Painter, Rect, Style};
//!
//! let style = Style::new().bg(Color::from_hex(0x282C34)).padding(10.0);
//!
//! let mut recorder = PaintRecorder::new();
//! recorder.fill_rect(Rect::new(0.0, 0.0, 400.0, 80.0), style.color_bg);
//! assert_eq!(recorder.ops().len(), 1);
//! ```

pub mod color;
pub mod geometry;
pub mod input;
pub mod paint;
pub mod style;
pub mod text;

pub use color::Color;
pub use geometry::{Axis, Point, Rect, Size};
pub use input::{InputSnapshot, InputSource, PointerButton};
pub use paint::{PaintOp, PaintRecorder, Painter};
pub use style::Style;
pub use text::TextMeasurer;
