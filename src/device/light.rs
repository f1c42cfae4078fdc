// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimmable smart light.

use crate::event::DeviceEvent;
use crate::state::{DeviceState, Direction, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable};
use crate::types::{DeviceKind, DeviceStatus, RangeRegulator};

use super::{DeviceCore, SmartDevice};

/// A dimmable light.
///
/// Turning the light on resets the brightness to its on-level (15 by
/// default) whatever it was before; turning it off resets it to 0.
///
/// # Examples
///
/// ```
/// use smart_home::device::{SmartDevice, SmartLight};
/// use smart_home::types::DeviceStatus;
///
/// let mut light = SmartLight::new("Google Light", "Utility", DeviceStatus::Offline);
/// assert_eq!(light.brightness(), 0);
///
/// light.turn_on();
/// assert_eq!(light.brightness(), 15);
///
/// light.turn_off();
/// assert_eq!(light.brightness(), 0);
/// ```
#[derive(Debug)]
pub struct SmartLight {
    core: DeviceCore,
    brightness: RangeRegulator<u8>,
    on_level: u8,
}

impl SmartLight {
    /// Default brightness.
    pub const DEFAULT_BRIGHTNESS: u8 = 0;
    /// Default brightness bounds.
    pub const BRIGHTNESS_RANGE: (u8, u8) = (0, 100);
    /// Brightness applied when the light is turned on.
    pub const DEFAULT_ON_LEVEL: u8 = 15;

    /// Creates a light with the default brightness settings.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, status: DeviceStatus) -> Self {
        let (min, max) = Self::BRIGHTNESS_RANGE;
        Self::with_levels(
            name,
            category,
            status,
            RangeRegulator::clamped(Self::DEFAULT_BRIGHTNESS, min, max),
            Self::DEFAULT_ON_LEVEL,
        )
    }

    /// Creates a light with a custom brightness regulator and on-level.
    ///
    /// An on-level outside the regulator bounds is ignored when the light
    /// is turned on, like any other out-of-range write.
    #[must_use]
    pub fn with_levels(
        name: impl Into<String>,
        category: impl Into<String>,
        status: DeviceStatus,
        brightness: RangeRegulator<u8>,
        on_level: u8,
    ) -> Self {
        Self {
            core: DeviceCore::new(name, category, status),
            brightness,
            on_level,
        }
    }

    /// Current brightness level.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness.get()
    }

    /// Brightness applied when the light is turned on.
    #[must_use]
    pub fn on_level(&self) -> u8 {
        self.on_level
    }

    /// Raises the brightness by one.
    pub fn increase_brightness(&mut self) -> DeviceEvent {
        self.brightness.set(self.brightness.get().saturating_add(1));
        self.level_changed(Direction::Up)
    }

    /// Lowers the brightness by one.
    pub fn decrease_brightness(&mut self) -> DeviceEvent {
        self.brightness.set(self.brightness.get().saturating_sub(1));
        self.level_changed(Direction::Down)
    }

    fn level_changed(&self, direction: Direction) -> DeviceEvent {
        let change = StateChange::brightness(direction, self.brightness.get());
        self.core
            .emit(DeviceEvent::level_changed(self.core.id(), change))
    }
}

impl SmartDevice for SmartLight {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::SmartLight
    }

    fn snapshot(&self) -> DeviceState {
        DeviceState {
            brightness: Some(self.brightness.get()),
            ..self.core.snapshot(self.kind())
        }
    }

    fn turn_on(&mut self) -> DeviceEvent {
        self.core.turn_on();
        self.brightness.set(self.on_level);
        let state = self.snapshot();
        self.core.emit(DeviceEvent::TurnedOn { state })
    }

    fn turn_off(&mut self) -> DeviceEvent {
        self.core.turn_off();
        self.brightness.set(0);
        let state = self.snapshot();
        self.core.emit(DeviceEvent::TurnedOff { state })
    }
}

impl Subscribable for SmartLight {
    fn callbacks(&self) -> &CallbackRegistry {
        self.core.callbacks()
    }
}
