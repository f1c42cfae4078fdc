// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.

use std::fmt;

use serde::Serialize;

use crate::command::HomeCommand;
use crate::state::{DeviceState, StateChange};
use crate::types::{DeviceKind, DeviceStatus};

use super::DeviceId;

/// Something a device or the home reports after an operation.
///
/// Every device and façade operation produces exactly one event. Its
/// [`Display`](fmt::Display) form is the line printed to the console.
///
/// # Examples
///
/// ```
/// use smart_home::device::{SmartDevice, SmartTv};
/// use smart_home::types::DeviceStatus;
///
/// let mut tv = SmartTv::new("Android TV", "Entertainment", DeviceStatus::Offline);
/// let event = tv.turn_on();
/// assert!(event.is_power());
/// assert_eq!(
///     event.to_string(),
///     "Android TV is turned on. Speaker volume is set to 10 and channel number is set to 1."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeviceEvent {
    /// The device was turned on.
    TurnedOn {
        /// State right after the transition.
        state: DeviceState,
    },

    /// The device was turned off.
    TurnedOff {
        /// State right after the transition.
        state: DeviceState,
    },

    /// A regulated level was stepped.
    LevelChanged {
        /// The ID of the device.
        device_id: DeviceId,
        /// The step and its resulting level.
        change: StateChange,
    },

    /// A command was refused because of the device status.
    CommandRejected {
        /// The ID of the device.
        device_id: DeviceId,
        /// The device name.
        name: String,
        /// The refused command.
        command: HomeCommand,
        /// The status that caused the refusal.
        status: DeviceStatus,
    },

    /// Device information was requested.
    InfoReported {
        /// Current device state.
        state: DeviceState,
    },
}

impl DeviceEvent {
    /// Returns the device ID associated with this event.
    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        match self {
            Self::TurnedOn { state } | Self::TurnedOff { state } | Self::InfoReported { state } => {
                state.id
            }
            Self::LevelChanged { device_id, .. } | Self::CommandRejected { device_id, .. } => {
                *device_id
            }
        }
    }

    /// Returns the new status if this event is a status transition.
    #[must_use]
    pub fn status_change(&self) -> Option<DeviceStatus> {
        match self {
            Self::TurnedOn { state } | Self::TurnedOff { state } => Some(state.status),
            _ => None,
        }
    }

    /// Returns `true` if this is a turn on/off event.
    #[must_use]
    pub fn is_power(&self) -> bool {
        matches!(self, Self::TurnedOn { .. } | Self::TurnedOff { .. })
    }

    /// Returns `true` if this is a level change event.
    #[must_use]
    pub fn is_level_change(&self) -> bool {
        matches!(self, Self::LevelChanged { .. })
    }

    /// Returns `true` if a command was rejected.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::CommandRejected { .. })
    }

    /// Creates a level change event.
    #[must_use]
    pub fn level_changed(device_id: DeviceId, change: StateChange) -> Self {
        Self::LevelChanged { device_id, change }
    }

    /// Renders the output line for this event.
    ///
    /// With `json`, info reports become the JSON snapshot of the device
    /// state. Every other event, and every event without `json`, renders
    /// as its `Display` line.
    #[must_use]
    pub fn render(&self, json: bool) -> String {
        match self {
            Self::InfoReported { state } if json => {
                serde_json::to_string(state).unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "Failed to serialize device state");
                    self.to_string()
                })
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnedOn { state } => match (state.kind, state.volume, state.channel) {
                (DeviceKind::SmartTv, Some(volume), Some(channel)) => write!(
                    f,
                    "{} is turned on. Speaker volume is set to {volume} and channel number is set to {channel}.",
                    state.name
                ),
                _ => match state.brightness {
                    Some(level) => write!(
                        f,
                        "{} turned on. The brightness level is {level}.",
                        state.name
                    ),
                    None => write!(f, "{} turned on", state.name),
                },
            },
            Self::TurnedOff { state } => write!(f, "{} turned off", state.name),
            Self::LevelChanged { change, .. } => change.fmt(f),
            Self::CommandRejected {
                name,
                command,
                status,
                ..
            } => write!(f, "{name} is {status}; {} not changed.", command.target()),
            Self::InfoReported { state } => state.fmt(f),
        }
    }
}
