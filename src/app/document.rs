// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document.rs
//
// Raster image the crop square is placed over.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{DynamicImage, GenericImageView, ImageReader};

use crate::constant::CROPPED_SUFFIX;
use crate::domain::crop::CropRegion;

pub type ImageHandle = cosmic::iced::widget::image::Handle;

/// A decoded raster image (PNG, JPEG, WebP, ...).
pub struct ImageDocument {
    document: DynamicImage,
    /// Cached handle for rendering.
    pub handle: ImageHandle,
}

impl ImageDocument {
    /// Load an image from disk.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let document = ImageReader::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        let handle = create_image_handle(&document);

        Ok(Self { document, handle })
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    /// Write the pixels inside `region` to `path`.
    pub fn save_cropped(&self, region: CropRegion, path: &Path) -> anyhow::Result<()> {
        let (x, y, width, height) = region.as_tuple();
        self.document
            .crop_imm(x, y, width, height)
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn create_image_handle(img: &DynamicImage) -> ImageHandle {
    let (w, h) = img.dimensions();
    let pixels = img.to_rgba8().into_raw();
    ImageHandle::from_rgba(w, h, pixels)
}

/// Default output location: `<stem>-cropped.<ext>` next to `input`.
pub fn cropped_path(input: &Path) -> Option<PathBuf> {
    let stem = input.file_stem()?.to_str()?;
    let mut name = format!("{stem}{CROPPED_SUFFIX}");
    if let Some(ext) = input.extension().and_then(|ext| ext.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    Some(input.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cropped_path_keeps_extension() {
        assert_eq!(
            cropped_path(Path::new("/tmp/photos/cat.jpg")),
            Some(PathBuf::from("/tmp/photos/cat-cropped.jpg"))
        );
    }

    #[test]
    fn test_cropped_path_without_extension() {
        assert_eq!(cropped_path(Path::new("scan")), Some(PathBuf::from("scan-cropped")));
        assert_eq!(cropped_path(Path::new("/")), None);
    }

    #[test]
    fn test_save_cropped_writes_region() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.png");
        DynamicImage::new_rgba8(64, 48).save(&source).unwrap();

        let doc = ImageDocument::open(&source).unwrap();
        assert_eq!(doc.dimensions(), (64, 48));

        let target = cropped_path(&source).unwrap();
        doc.save_cropped(CropRegion::new(4, 6, 20, 20), &target).unwrap();
        let cropped = image::open(&target).unwrap();
        assert_eq!(cropped.dimensions(), (20, 20));
    }
}
