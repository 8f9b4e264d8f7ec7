// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/geometry.rs
//
// Plain geometry values in parent-local coordinates.

/// A position in parent-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Static size of the container hosting the crop square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds matching an image of the given pixel size.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    /// Whether `square` keeps every corner strictly inside the band
    /// `(margin, extent - margin)` on both axes.
    pub fn contains_with_margin(&self, square: &Square, margin: f32) -> bool {
        square.x > margin
            && square.y > margin
            && square.right() < self.width - margin
            && square.bottom() < self.height - margin
    }
}

/// Axis-aligned square: top-left corner plus side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub x: f32,
    pub y: f32,
    pub side: f32,
}

impl Square {
    pub fn new(x: f32, y: f32, side: f32) -> Self {
        Self { x, y, side }
    }

    /// Largest centered square with side `ratio * min(width, height)` that
    /// still fits inside `bounds` with `margin` to spare on every edge.
    ///
    /// The side never drops below `margin`, so corner handles of that radius
    /// do not overlap. Returns `None` when `bounds` is too small for that.
    pub fn centered(bounds: Bounds, ratio: f32, margin: f32) -> Option<Self> {
        let extent = bounds.width.min(bounds.height);
        // Keep one extra unit of slack so the strict bound checks hold.
        let max_side = extent - 2.0 * margin - 2.0;
        if max_side < margin {
            return None;
        }

        let side = (extent * ratio.clamp(0.0, 1.0)).clamp(margin, max_side);

        Some(Self {
            x: (bounds.width - side) / 2.0,
            y: (bounds.height - side) / 2.0,
            side,
        })
    }

    pub fn right(&self) -> f32 {
        self.x + self.side
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.side
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.side / 2.0, self.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_edges() {
        let square = Square::new(50.0, 60.0, 100.0);
        assert_eq!(square.right(), 150.0);
        assert_eq!(square.bottom(), 160.0);
        assert_eq!(square.bottom_center(), Point::new(100.0, 160.0));
    }

    #[test]
    fn test_contains_with_margin_is_strict() {
        let bounds = Bounds::new(400.0, 400.0);
        assert!(bounds.contains_with_margin(&Square::new(50.0, 50.0, 100.0), 10.0));
        // x == margin touches the band edge.
        assert!(!bounds.contains_with_margin(&Square::new(10.0, 50.0, 100.0), 10.0));
        // right == width - margin touches the band edge.
        assert!(!bounds.contains_with_margin(&Square::new(290.0, 50.0, 100.0), 10.0));
    }

    #[test]
    fn test_centered_fits_small_bounds() {
        let bounds = Bounds::new(40.0, 200.0);
        let square = Square::centered(bounds, 0.9, 10.0).unwrap();
        assert!(bounds.contains_with_margin(&square, 10.0));
        assert_eq!(square.side, 18.0);
    }

    #[test]
    fn test_centered_keeps_handles_apart() {
        let square = Square::centered(Bounds::new(400.0, 400.0), 0.0, 10.0).unwrap();
        assert_eq!(square.side, 10.0);
        assert_eq!(Square::centered(Bounds::new(25.0, 25.0), 0.5, 10.0), None);
        assert_eq!(Square::centered(Bounds::new(31.0, 400.0), 0.5, 10.0), None);
    }

    #[test]
    fn test_centered_uses_ratio() {
        let square = Square::centered(Bounds::new(400.0, 200.0), 0.5, 10.0).unwrap();
        assert_eq!(square.side, 100.0);
        assert_eq!(square.x, 150.0);
        assert_eq!(square.y, 50.0);
    }
}
