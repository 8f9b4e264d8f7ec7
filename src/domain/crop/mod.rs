// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop square: geometry, handles, rendering surface and controller.

mod controller;
mod geometry;
mod handle;
mod region;
mod surface;

pub use controller::CropSquareController;
pub use geometry::{Bounds, Point, Square};
pub use handle::Handle;
pub use region::CropRegion;
pub use surface::{ContainerId, Layer, Part, Surface};
