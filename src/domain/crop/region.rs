// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/region.rs
//
// Pixel crop region derived from the crop square.

use super::geometry::Square;

/// Crop region in pixel coordinates.
///
/// Pure domain model: the integer rectangle an image crop consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Snap `square` to whole pixels inside an image of the given size.
    ///
    /// Returns `None` when nothing of the square overlaps the image.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_square(square: &Square, image_width: u32, image_height: u32) -> Option<Self> {
        let x = square.x.max(0.0).floor() as u32;
        let y = square.y.max(0.0).floor() as u32;
        let side = square.side.max(0.0).round() as u32;

        if x >= image_width || y >= image_height {
            return None;
        }

        let width = side.min(image_width - x);
        let height = side.min(image_height - y);

        let region = Self::new(x, y, width, height);
        region.is_valid().then_some(region)
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_square_snaps_to_pixels() {
        let region = CropRegion::from_square(&Square::new(50.7, 20.2, 99.6), 400, 300);
        assert_eq!(region.map(|r| r.as_tuple()), Some((50, 20, 100, 100)));
    }

    #[test]
    fn test_from_square_clamps_to_image() {
        let region = CropRegion::from_square(&Square::new(350.0, 10.0, 100.0), 400, 300);
        assert_eq!(region, Some(CropRegion::new(350, 10, 50, 100)));
    }

    #[test]
    fn test_from_square_outside_image() {
        assert_eq!(CropRegion::from_square(&Square::new(500.0, 10.0, 10.0), 400, 300), None);
        assert_eq!(CropRegion::from_square(&Square::new(10.0, 10.0, 0.2), 400, 300), None);
    }
}
