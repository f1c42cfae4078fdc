// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status and kind tags for smart devices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Connectivity status of a device.
///
/// # Examples
///
/// ```
/// use smart_home::types::DeviceStatus;
///
/// assert_eq!(DeviceStatus::Online.as_str(), "online");
/// assert_eq!("OFFLINE".parse::<DeviceStatus>().unwrap(), DeviceStatus::Offline);
///
/// // Legacy numeric status codes
/// assert_eq!(DeviceStatus::from_code(1), DeviceStatus::Online);
/// assert_eq!(DeviceStatus::from_code(7), DeviceStatus::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    /// Device is switched off or unreachable.
    Offline,
    /// Device is switched on.
    #[default]
    Online,
    /// Status has not been determined.
    Unknown,
}

impl DeviceStatus {
    /// Returns the lowercase name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a numeric status code: `0` is offline, `1` is online, anything
    /// else is unknown.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Offline,
            1 => Self::Online,
            _ => Self::Unknown,
        }
    }

    /// Returns `true` if the device is online.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offline" => Ok(Self::Offline),
            "online" => Ok(Self::Online),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ValueError::InvalidStatus(s.to_string())),
        }
    }
}

impl From<bool> for DeviceStatus {
    fn from(value: bool) -> Self {
        if value { Self::Online } else { Self::Offline }
    }
}

/// Display tag naming the concrete device variant.
///
/// Only used when describing a device, never to select behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// A plain device with no variant-specific behaviour.
    Unknown,
    /// A television with volume and channel controls.
    SmartTv,
    /// A dimmable light.
    SmartLight,
}

impl DeviceKind {
    /// Returns the human-readable type name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::SmartTv => "Smart TV",
            Self::SmartLight => "Smart Light",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
