//! Per-node visual styling
//!
//! A [`Style`] is plain data copied into each node when it is built.
//! Nodes never share or alias styles; mutating one node's style after
//! construction affects nothing else in the tree.

use crate::color::Color;

/// Visual properties every node carries.
///
/// `margin` and `padding` are uniform per-side values applied to all four
/// sides. Negative spacing and radii are clamped to zero by the builder
/// methods so layout never sees them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Background fill.
    pub color_bg: Color,
    /// Label text color.
    pub color_text: Color,
    /// Button fill while the pointer rests on it.
    pub color_hover: Color,
    /// Button fill while the primary button is held on it.
    pub color_press: Color,
    /// Space outside the node's rect, claimed from the parent.
    pub margin: f32,
    /// Space inside a container's rect, pushed onto its children.
    pub padding: f32,
    /// Corner rounding for the background fill. Zero draws a plain rect.
    pub corner_radius: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color_bg: Color::TRANSPARENT,
            color_text: Color::WHITE,
            color_hover: Color::WHITE,
            color_press: Color::BLACK,
            margin: 0.0,
            padding: 0.0,
            corner_radius: 0.0,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color
    pub fn bg(mut self, color: Color) -> Self {
        self.color_bg = color;
        self
    }

    /// Set the text color
    pub fn text_color(mut self, color: Color) -> Self {
        self.color_text = color;
        self
    }

    /// Set the hover color
    pub fn hover(mut self, color: Color) -> Self {
        self.color_hover = color;
        self
    }

    /// Set the pressed color
    pub fn pressed(mut self, color: Color) -> Self {
        self.color_press = color;
        self
    }

    /// Set the margin on all sides. Negative values clamp to zero.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Set the padding on all sides. Negative values clamp to zero.
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set the corner radius. Negative values clamp to zero.
    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }
}
