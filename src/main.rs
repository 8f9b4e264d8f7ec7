// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: logging, localization, CLI and the COSMIC runtime.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;

use std::path::PathBuf;

use clap::Parser;

use crate::app::{CropApp, Flags};

/// Select a square crop region over an image.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Image to open.
    pub file: Option<PathBuf>,

    /// Where to write the cropped image (defaults to `<name>-cropped.<ext>`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Radius of the crop handles in image pixels.
    #[arg(long)]
    pub handle_radius: Option<f32>,
}

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default()
        .size_limits(cosmic::iced::Limits::NONE.min_width(360.0).min_height(240.0));

    cosmic::app::run::<CropApp>(settings, Flags::Args(args))
}
