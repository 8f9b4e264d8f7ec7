// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View composition: error banner, canvas and footer.

mod canvas;
mod crop;

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget::{column, row, text};

use crate::app::{AppMessage, AppModel};
use crate::fl;

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let mut content = column().width(Length::Fill).height(Length::Fill);

    if let Some(error) = &model.error {
        content = content.push(text(fl!("error-banner", message = error.as_str())));
    }

    content.push(canvas::view(model)).into()
}

/// Status line with the current crop geometry.
pub fn footer(model: &AppModel) -> Element<'_, AppMessage> {
    let geometry = match &model.crop {
        Some(crop) if crop.is_visible() => {
            let square = crop.square();
            fl!(
                "crop-geometry",
                x = format!("{:.0}", square.x),
                y = format!("{:.0}", square.y),
                side = format!("{:.0}", square.side)
            )
        }
        Some(_) => fl!("crop-hidden"),
        None => String::new(),
    };

    let saved = model
        .last_saved
        .as_ref()
        .map(|path| fl!("crop-saved", path = path.display().to_string()))
        .unwrap_or_default();

    row()
        .push(text(geometry))
        .push(text(saved))
        .spacing(16)
        .padding(8)
        .into()
}
