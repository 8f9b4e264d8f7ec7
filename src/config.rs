// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

use crate::constant::{DEFAULT_HANDLE_RADIUS, DEFAULT_INITIAL_SIDE_RATIO};

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Radius of the crop handles in image pixels.
    pub handle_radius: f32,
    /// Side of the initial crop square relative to the shorter image edge
    /// (e.g., 0.5 = half).
    pub initial_side_ratio: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            handle_radius: DEFAULT_HANDLE_RADIUS,
            initial_side_ratio: DEFAULT_INITIAL_SIDE_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_crop_settings() {
        let config = AppConfig::default();
        assert_eq!(config.handle_radius, 10.0);
        assert!(config.initial_side_ratio > 0.0 && config.initial_side_ratio <= 1.0);
    }
}
