// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Basic device with only the shared behaviour.

use crate::subscription::{CallbackRegistry, Subscribable};
use crate::types::{DeviceKind, DeviceStatus};

use super::{DeviceCore, SmartDevice};

/// A device with no variant-specific behaviour.
#[derive(Debug)]
pub struct BasicDevice {
    core: DeviceCore,
}

impl BasicDevice {
    /// Creates a basic device with the given initial status.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, status: DeviceStatus) -> Self {
        Self {
            core: DeviceCore::new(name, category, status),
        }
    }
}

impl SmartDevice for BasicDevice {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Unknown
    }
}

impl Subscribable for BasicDevice {
    fn callbacks(&self) -> &CallbackRegistry {
        self.core.callbacks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_on_from_unknown() {
        let mut device = BasicDevice::new("Hub", "Network", DeviceStatus::Unknown);
        let event = device.turn_on();
        assert_eq!(device.status(), DeviceStatus::Online);
        assert_eq!(event.to_string(), "Hub turned on");
    }

    #[test]
    fn turn_off_from_any_status() {
        for status in [
            DeviceStatus::Online,
            DeviceStatus::Offline,
            DeviceStatus::Unknown,
        ] {
            let mut device = BasicDevice::new("Hub", "Network", status);
            let event = device.turn_off();
            assert_eq!(device.status(), DeviceStatus::Offline);
            assert_eq!(event.to_string(), "Hub turned off");
        }
    }

    #[test]
    fn info_reports_unknown_type() {
        let device = BasicDevice::new("Hub", "Network", DeviceStatus::Online);
        assert_eq!(
            device.device_info().to_string(),
            "Device name: Hub, category: Network, type: unknown"
        );
    }
}
