// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Render the center canvas area with the current image and crop square.

use cosmic::Element;
use cosmic::iced::widget::image::Image;
use cosmic::iced::{ContentFit, Length};
use cosmic::iced_widget::stack;
use cosmic::widget::{container, text};

use super::crop::crop_square_overlay;
use crate::app::{AppMessage, AppModel};
use crate::constant::CANVAS_CONTAINER;
use crate::fl;

/// Render the center canvas area with the current image.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let Some(doc) = &model.document else {
        return container(text(fl!("no-document")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
    };

    let (width, height) = doc.dimensions();
    let picture = Image::new(doc.handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    match &model.crop {
        Some(crop) => {
            let overlay = crop_square_overlay(width, height, crop, CANVAS_CONTAINER);
            stack![picture, overlay].into()
        }
        None => container(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}
