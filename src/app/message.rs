// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::domain::crop::Handle;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File.
    OpenPath(PathBuf),

    // Crop square.
    CropHandleDragged { handle: Handle, x: f32, y: f32 },
    ToggleCropVisible,
    BringCropToFront,
    ResetCrop,
    ApplyCrop,

    // Config.
    UpdateConfig(AppConfig),

    // Errors.
    ClearError,
}
