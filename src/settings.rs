use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

use crate::config::{
    DEFAULT_COLUMNS, DEFAULT_DODGE_DISTANCE, DEFAULT_PURSUIT_RADIUS, DEFAULT_ROWS,
    DEFAULT_TICK_INTERVAL_MS, GridSize, INITIAL_SNAKE_SIZE, PURSUIT_MOVE_PARITY,
};
use crate::error::SettingsError;
use crate::food::EvasionPolicy;

/// Runtime knobs, read from an optional JSON file.
///
/// Every field falls back to its default when missing, so `{}` is a valid
/// settings file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub columns: u16,
    pub rows: u16,
    pub initial_snake_size: usize,
    pub tick_interval_ms: u64,
    pub pursuit_radius: u32,
    pub dodge_distance: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            initial_snake_size: INITIAL_SNAKE_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            pursuit_radius: DEFAULT_PURSUIT_RADIUS,
            dodge_distance: DEFAULT_DODGE_DISTANCE,
        }
    }
}

impl Settings {
    /// Reads and validates settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be read, is not valid JSON for this
    /// type, or describes an unplayable board.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let settings: Self =
            serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
                path: PathBuf::from(path),
                source,
            })?;
        settings.validate()?;

        info!("loaded settings from {}: {settings:?}", path.display());
        Ok(settings)
    }

    /// Rejects values the simulation cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(SettingsError::Invalid("board needs at least one row and column"));
        }
        if self.initial_snake_size == 0 {
            return Err(SettingsError::Invalid("initial_snake_size must be at least 1"));
        }
        if self.tick_interval_ms == 0 {
            return Err(SettingsError::Invalid("tick_interval_ms must be positive"));
        }
        Ok(())
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize {
            width: self.columns,
            height: self.rows,
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn evasion_policy(&self) -> EvasionPolicy {
        EvasionPolicy {
            pursuit_radius: self.pursuit_radius,
            dodge_distance: self.dodge_distance,
            move_parity: PURSUIT_MOVE_PARITY,
        }
    }
}
