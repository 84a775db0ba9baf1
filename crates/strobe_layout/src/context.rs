//! Declarative builder context
//!
//! Application code declares a frame's tree by calling methods on [`Ui`]
//! inside nested closures. Each nesting construct is one push/run/pop
//! cycle on a stack of frames: `horizontal`/`vertical` push a fresh
//! frame, run the caller's closure (whose declarations land in that
//! frame), pop it, and wrap the collected nodes in a container appended
//! to the frame below. Sibling order is declaration order.

use strobe_core::{Style, TextMeasurer};

use crate::button::Button;
use crate::container::{Container, Direction};
use crate::label::Label;
use crate::node::{Node, NodeList};
use crate::panel::Panel;

/// The builder handed to frame closures.
///
/// Only [`build_root`] can construct one, which keeps the frame stack
/// balanced by construction: user code can append to the open frame and
/// open nested frames, nothing else.
pub struct Ui<'a> {
    /// Open frames. The top one collects the siblings of the closure
    /// currently running.
    stack: Vec<NodeList>,
    fonts: &'a dyn TextMeasurer,
}

impl<'a> Ui<'a> {
    fn new(fonts: &'a dyn TextMeasurer) -> Self {
        Self {
            stack: vec![NodeList::new()],
            fonts,
        }
    }

    /// Append an already-built node to the current frame.
    pub fn add(&mut self, node: Box<dyn Node>) {
        self.stack
            .last_mut()
            .expect("the builder always has an open frame")
            .push(node);
    }

    /// Declare a bare rectangle of the given size.
    pub fn panel(&mut self, style: Style, width: f32, height: f32) {
        self.add(Box::new(Panel::new(style, width, height)));
    }

    /// Declare a text label, sized through the frame's text measurer.
    pub fn label(&mut self, text: impl Into<String>, style: Style) {
        let label = Label::new(text, style, self.fonts);
        self.add(Box::new(label));
    }

    /// Declare a button.
    pub fn button(&mut self, style: Style) {
        self.add(Box::new(Button::new(style)));
    }

    /// Declare a row. Everything `build` declares becomes the row's
    /// children.
    pub fn horizontal(&mut self, style: Style, build: impl FnOnce(&mut Self)) {
        let children = self.with_frame(build);
        self.add(Box::new(Container::new(
            children,
            Direction::Horizontal,
            style,
        )));
    }

    /// Declare a column.
    pub fn vertical(&mut self, style: Style, build: impl FnOnce(&mut Self)) {
        let children = self.with_frame(build);
        self.add(Box::new(Container::new(
            children,
            Direction::Vertical,
            style,
        )));
    }

    /// One push/run/pop cycle: open a frame, let `build` fill it, close
    /// it and hand the collected nodes back to the caller for wrapping.
    fn with_frame(&mut self, build: impl FnOnce(&mut Self)) -> NodeList {
        self.stack.push(NodeList::new());
        build(self);
        self.stack.pop().expect("with_frame pushed this frame")
    }

    fn into_root(mut self) -> Box<dyn Node> {
        assert_eq!(
            self.stack.len(),
            1,
            "unbalanced builder frames at end of frame"
        );
        let mut roots = self.stack.pop().expect("length checked above");
        assert_eq!(roots.len(), 1, "the root frame must hold exactly one node");
        roots.pop().expect("length checked above")
    }
}

/// Run one frame's declarations and return the single root node.
///
/// The user closure runs inside an implicit top-level vertical container
/// carrying `root_style`, so top-level declarations stack downward. A
/// builder protocol violation (anything but exactly one node left in the
/// root frame) panics; that is a bug in the embedding, not a recoverable
/// state.
pub fn build_root<'a>(
    fonts: &'a dyn TextMeasurer,
    root_style: Style,
    build: impl FnOnce(&mut Ui<'a>),
) -> Box<dyn Node> {
    let mut ui = Ui::new(fonts);
    ui.vertical(root_style, build);
    ui.into_root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_core::Point;

    /// Ten pixels per character, ignoring the font size.
    struct TenPerChar;

    impl TextMeasurer for TenPerChar {
        fn measure(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    #[test]
    fn test_root_is_the_implicit_vertical() {
        let root = build_root(&TenPerChar, Style::new(), |ui| {
            ui.panel(Style::new(), 10.0, 10.0);
            ui.panel(Style::new(), 10.0, 10.0);
        });
        assert_eq!(root.describe(), "Container (Vertical)");

        let mut count = 0;
        root.visit_children(&mut |_| count += 1);
        assert_eq!(count, 2, "top-level declarations become the root's children");
    }

    #[test]
    fn test_empty_frame_still_yields_a_root() {
        let mut root = build_root(&TenPerChar, Style::new(), |_| {});
        root.layout();
        assert_eq!(root.state().rect.width(), 0.0);
        assert_eq!(root.state().rect.height(), 0.0);
    }

    #[test]
    fn test_declaration_order_is_child_order() {
        let mut root = build_root(&TenPerChar, Style::new(), |ui| {
            ui.horizontal(Style::new(), |ui| {
                ui.panel(Style::new(), 10.0, 10.0);
                ui.panel(Style::new(), 20.0, 10.0);
                ui.panel(Style::new(), 30.0, 10.0);
            });
        });
        root.layout();

        let mut widths = Vec::new();
        root.visit_children(&mut |row| {
            row.visit_children(&mut |child| widths.push(child.state().rect.width()));
        });
        assert_eq!(widths, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_nested_columns_inside_row() {
        // A row of two columns of labels.
        let mut root = build_root(&TenPerChar, Style::new(), |ui| {
            ui.horizontal(Style::new(), |ui| {
                ui.vertical(Style::new(), |ui| {
                    ui.label("foo", Style::new());
                    ui.label("barrr", Style::new());
                });
                ui.vertical(Style::new(), |ui| {
                    ui.label("BAZ", Style::new());
                    ui.label("quuux", Style::new());
                });
            });
        });
        root.layout();

        // First column: widest label is 50 wide, two lines of 50.
        // Second column likewise; the row is their sum.
        let mut column_rects = Vec::new();
        root.visit_children(&mut |row| {
            row.visit_children(&mut |column| column_rects.push(column.state().rect));
        });
        assert_eq!(column_rects.len(), 2);
        assert_eq!(column_rects[0].width(), 50.0);
        assert_eq!(column_rects[0].height(), 100.0);
        assert_eq!(column_rects[1].x(), 50.0, "second column starts after the first");
        assert_eq!(root.state().rect.width(), 100.0);
        assert_eq!(root.state().rect.height(), 100.0);
    }

    #[test]
    fn test_mixed_leaves_in_one_frame() {
        let mut root = build_root(&TenPerChar, Style::new(), |ui| {
            ui.label("hi", Style::new());
            ui.button(Style::new());
            ui.panel(Style::new(), 40.0, 10.0);
        });
        root.layout();

        let mut kinds = Vec::new();
        root.visit_children(&mut |child| {
            kinds.push(child.describe().split(' ').next().unwrap().to_string());
        });
        assert_eq!(kinds, vec!["Label", "Button", "Panel"]);

        // Column: label 50 high, button 100, panel 10.
        assert_eq!(root.state().rect.height(), 160.0);
        assert_eq!(root.state().rect.width(), 500.0, "the button is the widest child");
    }

    #[test]
    fn test_rebuild_produces_identical_tree() {
        let build = |ui: &mut Ui| {
            ui.horizontal(Style::new().padding(10.0), |ui| {
                ui.panel(Style::new().margin(5.0), 200.0, 50.0);
                ui.panel(Style::new().margin(5.0), 200.0, 50.0);
            });
        };

        let run = || {
            let mut root = build_root(&TenPerChar, Style::new(), build);
            root.layout();
            let mut rects = vec![root.state().rect];
            root.visit_children(&mut |row| {
                rects.push(row.state().rect);
                row.visit_children(&mut |child| rects.push(child.state().rect));
            });
            rects
        };

        assert_eq!(run(), run(), "frames are rebuilt from scratch, identically");
    }

    #[test]
    fn test_hit_test_after_build_and_layout() {
        let mut root = build_root(&TenPerChar, Style::new(), |ui| {
            ui.horizontal(Style::new(), |ui| {
                ui.panel(Style::new(), 200.0, 50.0);
                ui.panel(Style::new(), 200.0, 50.0);
            });
        });
        root.layout();
        assert!(root.debug_hit_test(Point::new(250.0, 25.0)));

        let mut flagged = Vec::new();
        fn collect(node: &dyn Node, flagged: &mut Vec<String>) {
            if node.state().hit {
                flagged.push(node.describe());
            }
            node.visit_children(&mut |child| collect(child, flagged));
        }
        collect(root.as_ref(), &mut flagged);

        assert_eq!(flagged.len(), 1, "exactly one node is flagged per pass");
        assert_eq!(flagged[0], "Panel (200, 0) 200x50");
    }
}
