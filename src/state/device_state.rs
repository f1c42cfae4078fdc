// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state snapshots.

use std::fmt;

use serde::Serialize;

use crate::event::DeviceId;
use crate::types::{DeviceKind, DeviceStatus};

/// Point-in-time snapshot of a device.
///
/// Levels a variant does not have are `None`: a TV carries volume and
/// channel, a light carries brightness, a basic device carries neither.
///
/// The [`Display`](fmt::Display) form is the device info line.
///
/// # Examples
///
/// ```
/// use smart_home::device::{SmartDevice, SmartLight};
/// use smart_home::types::DeviceStatus;
///
/// let light = SmartLight::new("Google Light", "Utility", DeviceStatus::Online);
/// let state = light.snapshot();
/// assert_eq!(state.brightness, Some(0));
/// assert_eq!(state.volume, None);
/// assert_eq!(
///     state.to_string(),
///     "Device name: Google Light, category: Utility, type: Smart Light"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    /// Device identifier.
    pub id: DeviceId,
    /// Device name.
    pub name: String,
    /// Device category.
    pub category: String,
    /// Variant tag.
    pub kind: DeviceKind,
    /// Current status.
    pub status: DeviceStatus,
    /// Speaker volume, for TVs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u8>,
    /// Channel number, for TVs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<u16>,
    /// Brightness level, for lights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
}

impl DeviceState {
    /// Returns `true` if the device is online.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status.is_online()
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device name: {}, category: {}, type: {}",
            self.name, self.category, self.kind
        )
    }
}
