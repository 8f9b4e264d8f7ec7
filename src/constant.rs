// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

use crate::domain::crop::ContainerId;

/// Default radius of the crop handles in image pixels.
pub const DEFAULT_HANDLE_RADIUS: f32 = 10.0;

/// Default side of the initial crop square relative to the shorter image edge.
pub const DEFAULT_INITIAL_SIDE_RATIO: f32 = 0.5;

/// Container that hosts the crop square inside the main canvas.
pub const CANVAS_CONTAINER: ContainerId = ContainerId(1);

/// Suffix appended to the file stem of the cropped output image.
pub const CROPPED_SUFFIX: &str = "-cropped";
