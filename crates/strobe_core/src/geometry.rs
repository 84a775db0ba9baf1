//! Geometry primitives for layout and hit testing
//!
//! All coordinates are `f32` in logical pixels, y-down, origin at the top
//! left. Sizes are clamped non-negative at construction so degenerate
//! values can never propagate through layout arithmetic.

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Point and Size
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size, always non-negative
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Negative inputs clamp to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rect
// ─────────────────────────────────────────────────────────────────────────────

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Point-in-rect test, half open: the left/top edges are inside, the
    /// right/bottom edges are not. Adjacent rects never both claim the
    /// shared edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.height
    }

    /// Position along the given axis.
    pub fn coord(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.origin.x,
            Axis::Y => self.origin.y,
        }
    }

    pub fn set_coord(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.origin.x = value,
            Axis::Y => self.origin.y = value,
        }
    }

    /// Extent along the given axis (width for X, height for Y).
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.size.width,
            Axis::Y => self.size.height,
        }
    }

    pub fn set_extent(&mut self, axis: Axis, value: f32) {
        let value = value.max(0.0);
        match axis {
            Axis::X => self.size.width = value,
            Axis::Y => self.size.height = value,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Axis
// ─────────────────────────────────────────────────────────────────────────────

/// One of the two screen axes. Layout resolves a flow direction into a
/// primary axis once, then runs the same arithmetic for either
/// orientation through [`Rect::coord`] and [`Rect::extent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_clamps_negative() {
        let size = Size::new(-10.0, 5.0);
        assert_eq!(size.width, 0.0, "negative width should clamp to zero");
        assert_eq!(size.height, 5.0);
    }

    #[test]
    fn test_rect_contains_half_open() {
        let rect = Rect::new(0.0, 0.0, 200.0, 50.0);
        assert!(rect.contains(Point::new(0.0, 0.0)), "top-left edge is inside");
        assert!(rect.contains(Point::new(199.9, 49.9)));
        assert!(!rect.contains(Point::new(200.0, 25.0)), "right edge is outside");
        assert!(!rect.contains(Point::new(100.0, 50.0)), "bottom edge is outside");
        assert!(!rect.contains(Point::new(-0.1, 25.0)));
    }

    #[test]
    fn test_adjacent_rects_share_no_point() {
        let left = Rect::new(0.0, 0.0, 200.0, 50.0);
        let right = Rect::new(200.0, 0.0, 200.0, 50.0);
        let seam = Point::new(200.0, 25.0);
        assert!(!left.contains(seam));
        assert!(right.contains(seam));
    }

    #[test]
    fn test_axis_accessors() {
        let mut rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.coord(Axis::X), 10.0);
        assert_eq!(rect.coord(Axis::Y), 20.0);
        assert_eq!(rect.extent(Axis::X), 30.0);
        assert_eq!(rect.extent(Axis::Y), 40.0);

        rect.set_coord(Axis::Y, 5.0);
        rect.set_extent(Axis::X, 99.0);
        assert_eq!(rect.origin.y, 5.0);
        assert_eq!(rect.size.width, 99.0);
    }

    #[test]
    fn test_set_extent_clamps() {
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        rect.set_extent(Axis::Y, -3.0);
        assert_eq!(rect.size.height, 0.0);
    }

    #[test]
    fn test_axis_cross() {
        assert_eq!(Axis::X.cross(), Axis::Y);
        assert_eq!(Axis::Y.cross(), Axis::X);
    }

    #[test]
    fn test_rect_display() {
        let rect = Rect::new(15.0, 15.0, 200.0, 50.0);
        assert_eq!(format!("{rect}"), "(15, 15) 200x50");
    }
}
