// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/controller.rs
//
// Square crop selection driven by three drag handles.

use anyhow::ensure;

use super::geometry::{Bounds, Point, Square};
use super::handle::Handle;
use super::region::CropRegion;
use super::surface::{ContainerId, Part, Surface};

/// Owns the crop square and keeps it inside the parent bounds.
///
/// Every bound check is strict against `handle_radius` so that no handle
/// ever touches the parent edge. Drags that would break a bound are ignored
/// and leave the square untouched.
pub struct CropSquareController<S: Surface> {
    square: Square,
    parent: Bounds,
    handle_radius: f32,
    visible: bool,
    container: Option<ContainerId>,
    surface: S,
}

impl<S: Surface> CropSquareController<S> {
    /// Create a controller and push the initial geometry to `surface`.
    pub fn new(
        square: Square,
        parent: Bounds,
        handle_radius: f32,
        surface: S,
    ) -> anyhow::Result<Self> {
        ensure!(
            handle_radius.is_finite() && handle_radius > 0.0,
            "Handle radius must be positive, got {handle_radius}"
        );
        ensure!(
            square.side.is_finite() && square.side > 0.0,
            "Square side must be positive, got {}",
            square.side
        );
        ensure!(
            square.side >= handle_radius,
            "Square side {} is smaller than the handle radius {handle_radius}",
            square.side
        );
        ensure!(
            parent.contains_with_margin(&square, handle_radius),
            "Square {square:?} does not fit inside {}x{} with handle radius {handle_radius}",
            parent.width,
            parent.height
        );

        let mut controller = Self {
            square,
            parent,
            handle_radius,
            visible: true,
            container: None,
            surface,
        };
        controller.sync();

        Ok(controller)
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn parent(&self) -> Bounds {
        self.parent
    }

    pub fn handle_radius(&self) -> f32 {
        self.handle_radius
    }

    pub fn handle_center(&self, handle: Handle) -> Point {
        handle.center(&self.square)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Pixel region covered by the square, clamped to the image.
    pub fn crop_region(&self, image_width: u32, image_height: u32) -> Option<CropRegion> {
        CropRegion::from_square(&self.square, image_width, image_height)
    }

    /// Route a pointer position to the drag logic of `handle`.
    pub fn on_drag(&mut self, handle: Handle, pointer: Point) -> bool {
        match handle {
            Handle::NorthWest => self.on_drag_nw(pointer.x),
            Handle::SouthEast => self.on_drag_se(pointer.x),
            Handle::Move => self.on_drag_move(pointer.x, pointer.y),
        }
    }

    /// Drag the north-west corner. Only the horizontal pointer position is
    /// used; the vertical edge follows it to keep the shape square.
    pub fn on_drag_nw(&mut self, pointer_x: f32) -> bool {
        let r = self.handle_radius;
        let Square { x, y, side } = self.square;

        let delta = pointer_x - x;
        let new_x = pointer_x;
        let new_y = y + delta;

        if !(new_x > r && new_y > r && new_x <= x + side - r) {
            log::trace!("Rejected north-west drag to x={pointer_x}");
            return false;
        }

        self.square = Square::new(new_x, new_y, side - delta);
        self.sync();
        true
    }

    /// Drag the south-east corner. The horizontal delta is mirrored onto the
    /// vertical axis.
    pub fn on_drag_se(&mut self, pointer_x: f32) -> bool {
        let r = self.handle_radius;
        let Square { x, y, side } = self.square;

        let delta = pointer_x - (x + side);
        let new_right = x + side + delta;
        let new_bottom = y + side + delta;

        if !(new_right > x + r
            && new_right < self.parent.width - r
            && new_bottom < self.parent.height - r)
        {
            log::trace!("Rejected south-east drag to x={pointer_x}");
            return false;
        }

        self.square.side = side + delta;
        self.sync();
        true
    }

    /// Translate the square so its bottom center follows the pointer. Each
    /// axis is checked on its own, so a blocked axis does not stop the other.
    pub fn on_drag_move(&mut self, pointer_x: f32, pointer_y: f32) -> bool {
        let r = self.handle_radius;
        let anchor = self.handle_center(Handle::Move);
        let side = self.square.side;

        let new_x = self.square.x + (pointer_x - anchor.x);
        let new_y = self.square.y + (pointer_y - anchor.y);

        let x_ok = new_x > r && new_x + side < self.parent.width - r;
        let y_ok = new_y > r && new_y + side < self.parent.height - r;

        if x_ok {
            self.square.x = new_x;
        }
        if y_ok {
            self.square.y = new_y;
        }

        if !(x_ok || y_ok) {
            log::trace!("Rejected move drag to ({pointer_x}, {pointer_y})");
            return false;
        }

        self.sync();
        true
    }

    /// Show or hide the outline and all handles together.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        for part in Part::ALL {
            self.surface.set_visible(part, visible);
        }
    }

    /// Raise the outline and then each handle, keeping handles on top.
    pub fn bring_to_front(&mut self) {
        for part in Part::ALL {
            self.surface.raise(part);
        }
    }

    /// Move the outline and its handles into `container`.
    pub fn attach_to(&mut self, container: ContainerId) {
        if self.container == Some(container) {
            return;
        }

        log::debug!("Attaching crop square to container {container:?}");
        for part in Part::ALL {
            self.surface.reparent(part, container);
        }
        self.container = Some(container);
    }

    fn sync(&mut self) {
        self.surface.place_outline(self.square);
        for handle in Handle::ALL {
            self.surface.place_handle(handle, handle.center(&self.square));
        }
    }
}
