// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart devices.
//!
//! Every device embeds a [`DeviceCore`] holding the shared identity and
//! status, and implements [`SmartDevice`]. The trait's `turn_on`,
//! `turn_off` and `device_info` have default implementations built on the
//! core; variants that override them call [`DeviceCore::turn_on`] or
//! [`DeviceCore::turn_off`] first and then apply their own effects.
//!
//! | Device | Kind | Levels |
//! |--------|------|--------|
//! | [`BasicDevice`] | `unknown` | none |
//! | [`SmartTv`] | `Smart TV` | volume 10 in `[0, 100]`, channel 1 in `[1, 200]` |
//! | [`SmartLight`] | `Smart Light` | brightness 0 in `[0, 100]`, 15 when turned on |
//!
//! # Examples
//!
//! ```
//! use smart_home::device::{SmartDevice, SmartLight, SmartTv};
//! use smart_home::types::DeviceStatus;
//!
//! let mut devices: Vec<Box<dyn SmartDevice>> = vec![
//!     Box::new(SmartTv::new("Android TV", "Entertainment", DeviceStatus::Offline)),
//!     Box::new(SmartLight::new("Google Light", "Utility", DeviceStatus::Offline)),
//! ];
//!
//! for device in &mut devices {
//!     device.turn_on();
//!     assert_eq!(device.status(), DeviceStatus::Online);
//! }
//! ```

mod basic;
mod light;
mod tv;

pub use basic::BasicDevice;
pub use light::SmartLight;
pub use tv::SmartTv;

use crate::event::{DeviceEvent, DeviceId};
use crate::state::DeviceState;
use crate::subscription::CallbackRegistry;
use crate::types::{DeviceKind, DeviceStatus};

/// Identity and status shared by every device.
#[derive(Debug)]
pub struct DeviceCore {
    id: DeviceId,
    name: String,
    category: String,
    status: DeviceStatus,
    callbacks: CallbackRegistry,
}

impl DeviceCore {
    /// Creates the shared part of a device.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, status: DeviceStatus) -> Self {
        Self {
            id: DeviceId::new(),
            name: name.into(),
            category: category.into(),
            status,
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Device identifier.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Device category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    /// Registry for this device's subscriptions.
    #[must_use]
    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Marks the device online.
    pub fn turn_on(&mut self) {
        self.set_status(DeviceStatus::Online);
    }

    /// Marks the device offline.
    pub fn turn_off(&mut self) {
        self.set_status(DeviceStatus::Offline);
    }

    fn set_status(&mut self, status: DeviceStatus) {
        tracing::info!(
            device = %self.name,
            from = %self.status,
            to = %status,
            "Device status changed"
        );
        self.status = status;
    }

    /// Snapshot with no regulated levels.
    #[must_use]
    pub fn snapshot(&self, kind: DeviceKind) -> DeviceState {
        DeviceState {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            kind,
            status: self.status,
            volume: None,
            channel: None,
            brightness: None,
        }
    }

    /// Dispatches `event` to this device's callbacks and returns it.
    pub fn emit(&self, event: DeviceEvent) -> DeviceEvent {
        self.callbacks.dispatch(&event);
        event
    }
}

/// Behaviour common to all smart devices.
///
/// Implementors provide access to their [`DeviceCore`], their
/// [`DeviceKind`] and, if they have regulated levels, a richer
/// [`snapshot`](SmartDevice::snapshot).
pub trait SmartDevice {
    /// Shared identity and status.
    fn core(&self) -> &DeviceCore;

    /// Mutable access to the shared identity and status.
    fn core_mut(&mut self) -> &mut DeviceCore;

    /// Variant tag, for display only.
    fn kind(&self) -> DeviceKind;

    /// Device identifier.
    fn id(&self) -> DeviceId {
        self.core().id()
    }

    /// Device name.
    fn name(&self) -> &str {
        self.core().name()
    }

    /// Device category.
    fn category(&self) -> &str {
        self.core().category()
    }

    /// Current status.
    fn status(&self) -> DeviceStatus {
        self.core().status()
    }

    /// Point-in-time snapshot of the device.
    fn snapshot(&self) -> DeviceState {
        self.core().snapshot(self.kind())
    }

    /// Turns the device on. The status becomes online.
    fn turn_on(&mut self) -> DeviceEvent {
        self.core_mut().turn_on();
        let state = self.snapshot();
        self.core().emit(DeviceEvent::TurnedOn { state })
    }

    /// Turns the device off. The status becomes offline.
    fn turn_off(&mut self) -> DeviceEvent {
        self.core_mut().turn_off();
        let state = self.snapshot();
        self.core().emit(DeviceEvent::TurnedOff { state })
    }

    /// Reports the device name, category and type.
    fn device_info(&self) -> DeviceEvent {
        let state = self.snapshot();
        self.core().emit(DeviceEvent::InfoReported { state })
    }
}
