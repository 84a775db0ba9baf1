//! Strobe Layout
//!
//! The per-frame tree engine:
//!
//! - **Nodes**: the [`Node`] capability and its four variants
//!   ([`Panel`], [`Label`], [`Button`], [`Container`])
//! - **Layout**: directional box-model pass, positions top-down and
//!   sizes bottom-up
//! - **Hit testing**: depth-first, first-match-wins flagging for the
//!   debug overlay
//! - **Builder**: the [`Ui`] context that turns nested closures into a
//!   tree, one push/run/pop cycle per nesting construct
//!
//! Trees built here live exactly one frame. Build with [`build_root`],
//! lay out, route input, hit-test, draw, and drop.
//!
//! # Example
//!
//! ```rust
//! use strobe_core::{Style, TextMeasurer};
//! use strobe_layout::{build_root, Node};
//!
//! struct TenPerChar;
//!
//! impl TextMeasurer for TenPerChar {
//!     fn measure(&self, text: &str, _font_size: f32) -> f32 {
//!         text.chars().count() as f32 * 10.0
//!     }
//! }
//!
//! let mut root = build_root(&TenPerChar, Style::new(), |ui| {
//!     ui.horizontal(Style::new(), |ui| {
//!         ui.label("foo", Style::new());
//!         ui.label("barrr", Style::new());
//!     });
//! });
//! root.layout();
//! assert_eq!(root.state().rect.width(), 80.0);
//! ```

pub mod button;
pub mod container;
pub mod context;
pub mod dump;
pub mod label;
pub mod node;
pub mod panel;

pub use button::{Button, ButtonState};
pub use container::{Container, Direction};
pub use context::{build_root, Ui};
pub use dump::{hit_description, tree_to_string};
pub use label::Label;
pub use node::{Node, NodeList, NodeState};
pub use panel::Panel;
