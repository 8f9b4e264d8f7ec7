// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/handle.rs
//
// Drag handles attached to the crop square.

use super::geometry::{Point, Square};

/// One of the three circular drag targets of the crop square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Top-left corner, resizes diagonally.
    NorthWest,
    /// Bottom-right corner, resizes diagonally.
    SouthEast,
    /// Bottom center, translates the whole square.
    Move,
}

impl Handle {
    /// All handles in back-to-front stacking order.
    pub const ALL: [Handle; 3] = [Handle::NorthWest, Handle::SouthEast, Handle::Move];

    /// Center of this handle for the given square.
    pub fn center(self, square: &Square) -> Point {
        match self {
            Handle::NorthWest => square.top_left(),
            Handle::SouthEast => square.bottom_right(),
            Handle::Move => square.bottom_center(),
        }
    }

    /// Whether `point` lies inside a handle of `radius` centered at `center`.
    pub fn hit(center: Point, radius: f32, point: Point) -> bool {
        center.distance_to(point) <= radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_follow_square() {
        let square = Square::new(50.0, 50.0, 100.0);
        assert_eq!(Handle::NorthWest.center(&square), Point::new(50.0, 50.0));
        assert_eq!(Handle::SouthEast.center(&square), Point::new(150.0, 150.0));
        assert_eq!(Handle::Move.center(&square), Point::new(100.0, 150.0));
    }

    #[test]
    fn test_hit_is_circular() {
        let center = Point::new(100.0, 100.0);
        assert!(Handle::hit(center, 10.0, Point::new(106.0, 107.0)));
        assert!(Handle::hit(center, 10.0, Point::new(110.0, 100.0)));
        // Inside the bounding box but outside the circle.
        assert!(!Handle::hit(center, 10.0, Point::new(108.0, 108.0)));
    }
}
