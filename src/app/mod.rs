// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

pub mod document;
pub mod message;
pub mod model;
pub mod update;
mod view;

pub use message::AppMessage;
pub use model::AppModel;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::{Action, Element, Task};

use crate::Args;
use crate::config::AppConfig;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct CropApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
}

impl cosmic::Application for CropApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "io.github.cropsquare.CropSquare";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let mut config = match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
            Ok(handler) => AppConfig::get_entry(&handler).unwrap_or_else(|(errors, config)| {
                for e in errors {
                    log::warn!("Invalid config entry: {e}");
                }
                config
            }),
            Err(e) => {
                log::warn!("Config unavailable, using defaults: {e}");
                AppConfig::default()
            }
        };

        let Flags::Args(args) = flags;

        // CLI overrides are not persisted.
        if let Some(radius) = args.handle_radius {
            config.handle_radius = radius;
        }

        let mut model = AppModel::new(args.output);
        if let Some(path) = args.file {
            update::update(&mut model, &config, &AppMessage::OpenPath(path));
        }

        (Self { core, model, config }, Task::none())
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        if let AppMessage::UpdateConfig(config) = &message {
            log::debug!("Config changed: {config:?}");
            self.config = config.clone();
            return Task::none();
        }

        update::update(&mut self.model, &self.config, &message);
        Task::none()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model)
    }

    fn footer(&self) -> Option<Element<'_, Self::Message>> {
        Some(view::footer(&self.model))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::batch([
            keyboard::on_key_press(handle_key_press),
            self.core()
                .watch_config::<AppConfig>(Self::APP_ID)
                .map(|update| AppMessage::UpdateConfig(update.config)),
        ])
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::Enter) => Some(AppMessage::ApplyCrop),
        Key::Named(Named::Escape) => Some(AppMessage::ClearError),
        Key::Character(ch) if ch.eq_ignore_ascii_case("v") => Some(AppMessage::ToggleCropVisible),
        Key::Character(ch) if ch.eq_ignore_ascii_case("f") => Some(AppMessage::BringCropToFront),
        Key::Character(ch) if ch.eq_ignore_ascii_case("r") => Some(AppMessage::ResetCrop),
        _ => None,
    }
}
