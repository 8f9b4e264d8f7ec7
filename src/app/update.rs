// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Apply messages to the application model.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::app::document::{ImageDocument, cropped_path};
use crate::app::message::AppMessage;
use crate::app::model::AppModel;
use crate::config::AppConfig;
use crate::domain::crop::Point;

pub fn update(model: &mut AppModel, config: &AppConfig, message: &AppMessage) {
    match message {
        AppMessage::OpenPath(path) => open_path(model, config, path),

        AppMessage::CropHandleDragged { handle, x, y } => {
            if let Some(crop) = model.crop.as_mut() {
                crop.on_drag(*handle, Point::new(*x, *y));
            }
        }

        AppMessage::ToggleCropVisible => {
            if let Some(crop) = model.crop.as_mut() {
                let visible = !crop.is_visible();
                crop.set_visible(visible);
            }
        }

        AppMessage::BringCropToFront => {
            if let Some(crop) = model.crop.as_mut() {
                crop.bring_to_front();
            }
        }

        AppMessage::ResetCrop => {
            if let Some((width, height)) = model.document.as_ref().map(ImageDocument::dimensions) {
                if let Err(e) = model.place_crop(width, height, config) {
                    log::error!("Failed to place crop square: {e:#}");
                    model.set_error(format!("{e:#}"));
                }
            }
        }

        AppMessage::ApplyCrop => match apply_crop(model) {
            Ok(path) => {
                log::info!("Saved cropped image to {}", path.display());
                model.last_saved = Some(path);
            }
            Err(e) => {
                log::error!("Failed to apply crop: {e:#}");
                model.set_error(format!("{e:#}"));
            }
        },

        // Handled by the application.
        AppMessage::UpdateConfig(_) => {}

        AppMessage::ClearError => model.clear_error(),
    }
}

fn open_path(model: &mut AppModel, config: &AppConfig, path: &Path) {
    let result = ImageDocument::open(path).and_then(|doc| {
        let (width, height) = doc.dimensions();
        model.place_crop(width, height, config)?;
        Ok(doc)
    });

    match result {
        Ok(doc) => {
            log::debug!("Opened {}", path.display());
            model.document = Some(doc);
            model.current_path = Some(path.to_path_buf());
            model.last_saved = None;
            model.clear_error();
        }
        Err(e) => {
            log::error!("Failed to open {}: {e:#}", path.display());
            model.set_error(format!("{e:#}"));
        }
    }
}

fn apply_crop(model: &AppModel) -> anyhow::Result<PathBuf> {
    let doc = model.document.as_ref().context("No image loaded")?;
    let crop = model.crop.as_ref().context("No crop square placed")?;

    let (width, height) = doc.dimensions();
    let region = crop
        .crop_region(width, height)
        .context("Crop square does not cover the image")?;

    let target = match &model.output_path {
        Some(path) => path.clone(),
        None => model
            .current_path
            .as_deref()
            .and_then(cropped_path)
            .context("Cannot derive an output path")?,
    };

    doc.save_cropped(region, &target)?;
    Ok(target)
}
