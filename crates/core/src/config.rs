//! Game configuration
//!
//! Read from environment variables, falling back to defaults:
//!
//! - `COLUMNS_PALETTE`: `classic` (3 colors, default) or `rich` (7 colors)
//! - `COLUMNS_SPEED`: starting speed level, 1 to `MAX_SPEED` (default 1)

use crate::types::{Palette, MAX_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub palette: Palette,
    pub start_speed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Palette::Classic,
            start_speed: 1,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let palette = match lookup("COLUMNS_PALETTE") {
            Some(raw) => Palette::from_str(&raw).unwrap_or_else(|| {
                log::warn!("COLUMNS_PALETTE: unknown palette {:?}, using default", raw);
                defaults.palette
            }),
            None => defaults.palette,
        };

        let start_speed = match lookup("COLUMNS_SPEED") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(speed) if (1..=MAX_SPEED).contains(&speed) => speed,
                _ => {
                    log::warn!(
                        "COLUMNS_SPEED: expected 1..={}, got {:?}, using default",
                        MAX_SPEED,
                        raw
                    );
                    defaults.start_speed
                }
            },
            None => defaults.start_speed,
        };

        Self {
            palette,
            start_speed,
        }
    }
}
