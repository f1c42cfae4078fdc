// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration loading: TOML file with environment variable overrides.
//!
//! The file is optional and every field has a default, so a missing file
//! yields the stock home (an online "Android TV" and an online
//! "Google Light"). `SMART_HOME_LOG`, then `RUST_LOG`, override the log
//! filter.
//!
//! ```toml
//! [tv]
//! name = "Living Room TV"
//! status = "offline"
//! volume = { initial = 10, min = 0, max = 100 }
//! channel = { initial = 1, min = 1, max = 200 }
//!
//! [light]
//! name = "Desk Lamp"
//! on_level = 15
//!
//! [logging]
//! filter = "smart_home=debug"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::device::{SmartLight, SmartTv};
use crate::error::{ConfigError, ValueError};
use crate::types::{DeviceStatus, RangeRegulator};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "smart_home.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// TV settings.
    pub tv: TvConfig,
    /// Light settings.
    pub light: LightConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// A regulated level: initial value and inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LevelConfig<T> {
    /// Value at construction.
    pub initial: T,
    /// Lower bound (inclusive).
    pub min: T,
    /// Upper bound (inclusive).
    pub max: T,
}

impl<T> LevelConfig<T>
where
    T: Copy + PartialOrd + Into<i64>,
{
    /// Builds the regulator, naming `field` in the error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Value` if the bounds are inverted or the initial
    /// value lies outside them.
    pub fn regulator(&self, field: &'static str) -> Result<RangeRegulator<T>, ConfigError> {
        RangeRegulator::new(self.initial, self.min, self.max)
            .map_err(|source| ConfigError::Value { field, source })
    }
}

/// TV configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TvConfig {
    /// Device name.
    pub name: String,
    /// Device category.
    pub category: String,
    /// Initial status.
    pub status: DeviceStatus,
    /// Speaker volume.
    pub volume: LevelConfig<u8>,
    /// Channel number.
    pub channel: LevelConfig<u16>,
}

impl TvConfig {
    /// Builds the configured TV.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Value` if a level is not a valid range.
    pub fn build(&self) -> Result<SmartTv, ConfigError> {
        Ok(SmartTv::with_levels(
            self.name.clone(),
            self.category.clone(),
            self.status,
            self.volume.regulator("tv.volume")?,
            self.channel.regulator("tv.channel")?,
        ))
    }
}

impl Default for TvConfig {
    fn default() -> Self {
        let (vmin, vmax) = SmartTv::VOLUME_RANGE;
        let (cmin, cmax) = SmartTv::CHANNEL_RANGE;
        Self {
            name: "Android TV".to_string(),
            category: "Entertainment".to_string(),
            status: DeviceStatus::Online,
            volume: LevelConfig {
                initial: SmartTv::DEFAULT_VOLUME,
                min: vmin,
                max: vmax,
            },
            channel: LevelConfig {
                initial: SmartTv::DEFAULT_CHANNEL,
                min: cmin,
                max: cmax,
            },
        }
    }
}

/// Light configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Device name.
    pub name: String,
    /// Device category.
    pub category: String,
    /// Initial status.
    pub status: DeviceStatus,
    /// Brightness level.
    pub brightness: LevelConfig<u8>,
    /// Brightness applied when the light is turned on.
    pub on_level: u8,
}

impl LightConfig {
    /// Builds the configured light.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Value` if the brightness is not a valid range,
    /// cannot reach 0 when the light is turned off, or does not contain the
    /// on-level.
    pub fn build(&self) -> Result<SmartLight, ConfigError> {
        let brightness = self.brightness.regulator("light.brightness")?;
        if !brightness.contains(0) {
            return Err(ConfigError::Value {
                field: "light.brightness",
                source: ValueError::OutOfRange {
                    min: brightness.min().into(),
                    max: brightness.max().into(),
                    actual: 0,
                },
            });
        }
        if !brightness.contains(self.on_level) {
            return Err(ConfigError::Value {
                field: "light.on_level",
                source: ValueError::OutOfRange {
                    min: brightness.min().into(),
                    max: brightness.max().into(),
                    actual: self.on_level.into(),
                },
            });
        }
        Ok(SmartLight::with_levels(
            self.name.clone(),
            self.category.clone(),
            self.status,
            brightness,
            self.on_level,
        ))
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        let (min, max) = SmartLight::BRIGHTNESS_RANGE;
        Self {
            name: "Google Light".to_string(),
            category: "Utility".to_string(),
            status: DeviceStatus::Online,
            brightness: LevelConfig {
                initial: SmartLight::DEFAULT_BRIGHTNESS,
                min,
                max,
            },
            on_level: SmartLight::DEFAULT_ON_LEVEL,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smart_home=warn".to_string(),
        }
    }
}

impl HomeConfig {
    /// Loads configuration from `path` (if present), then applies
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file exists but cannot be read or
    /// parsed, or if a configured level is invalid.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let mut config = Self::from_file(path.as_ref())?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// `RUST_LOG` wins over `SMART_HOME_LOG`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("SMART_HOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Checks that every configured level forms a valid range.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::Value` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tv.build()?;
        self.light.build()?;
        Ok(())
    }
}
