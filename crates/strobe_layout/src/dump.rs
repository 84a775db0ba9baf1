//! Indented tree dump for the debug overlay
//!
//! One line per node, one leading space per depth level, and a `"> "`
//! marker in front of the node the hit-test pass flagged.

use crate::node::Node;

/// Render the whole tree as an indented outline.
pub fn tree_to_string(root: &dyn Node) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &dyn Node, depth: usize) {
    for _ in 0..depth {
        out.push(' ');
    }
    if node.state().hit {
        out.push_str("> ");
    }
    out.push_str(&node.describe());
    out.push('\n');

    node.visit_children(&mut |child| write_node(out, child, depth + 1));
}

/// Description of the node the last hit-test pass flagged, if any.
pub fn hit_description(root: &dyn Node) -> Option<String> {
    if root.state().hit {
        return Some(root.describe());
    }
    let mut found = None;
    root.visit_children(&mut |child| {
        if found.is_none() {
            found = hit_description(child);
        }
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{Container, Direction};
    use crate::node::NodeList;
    use crate::panel::Panel;
    use smallvec::smallvec;
    use strobe_core::{Point, Style};

    fn two_panel_row() -> Container {
        let children: NodeList = smallvec![
            Box::new(Panel::new(Style::new(), 200.0, 50.0)) as Box<dyn Node>,
            Box::new(Panel::new(Style::new(), 200.0, 50.0)) as Box<dyn Node>,
        ];
        let mut row = Container::new(children, Direction::Horizontal, Style::new());
        row.layout();
        row
    }

    #[test]
    fn test_dump_indents_by_depth() {
        let row = two_panel_row();
        let dump = tree_to_string(&row);
        assert_eq!(
            dump,
            "Container (Horizontal)\n Panel (0, 0) 200x50\n Panel (200, 0) 200x50\n"
        );
    }

    #[test]
    fn test_dump_marks_the_hit_node() {
        let mut row = two_panel_row();
        row.debug_hit_test(Point::new(250.0, 25.0));

        let dump = tree_to_string(&row);
        assert!(dump.contains("\n > Panel (200, 0) 200x50\n"));
        assert!(!dump.contains("> Panel (0, 0)"));
    }

    #[test]
    fn test_hit_description_finds_the_flagged_node() {
        let mut row = two_panel_row();
        assert_eq!(hit_description(&row), None);

        row.debug_hit_test(Point::new(10.0, 10.0));
        assert_eq!(hit_description(&row), Some("Panel (0, 0) 200x50".to_string()));
    }
}
