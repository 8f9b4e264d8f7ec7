// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop square overlay widget.

mod overlay;

pub use overlay::crop_square_overlay;
