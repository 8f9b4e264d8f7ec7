// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::PathBuf;

use anyhow::Context;

use crate::app::document::ImageDocument;
use crate::config::AppConfig;
use crate::constant::CANVAS_CONTAINER;
use crate::domain::crop::{Bounds, CropSquareController, Layer, Square};

pub type CropSquare = CropSquareController<Layer>;

pub struct AppModel {
    // Document.
    pub document: Option<ImageDocument>,
    pub current_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,

    // Tools.
    pub crop: Option<CropSquare>,

    // UI state.
    pub error: Option<String>,
    pub last_saved: Option<PathBuf>,
}

impl AppModel {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self {
            document: None,
            current_path: None,
            output_path,
            crop: None,
            error: None,
            last_saved: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replace the crop square with a centered one for a canvas of the
    /// given pixel size and attach it to the canvas.
    pub fn place_crop(
        &mut self,
        width: u32,
        height: u32,
        config: &AppConfig,
    ) -> anyhow::Result<()> {
        let radius = config.handle_radius;
        let parent = Bounds::from_pixels(width, height);
        let square = Square::centered(parent, config.initial_side_ratio, radius)
            .with_context(|| {
                format!(
                    "Image {width}x{height} is too small for a crop square \
                     with handle radius {radius}"
                )
            })?;

        let mut crop = CropSquareController::new(square, parent, radius, Layer::new())?;
        crop.attach_to(CANVAS_CONTAINER);
        self.crop = Some(crop);

        Ok(())
    }
}
