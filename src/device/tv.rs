// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart TV with speaker volume and channel controls.

use crate::event::DeviceEvent;
use crate::state::{DeviceState, Direction, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable};
use crate::types::{DeviceKind, DeviceStatus, RangeRegulator};

use super::{DeviceCore, SmartDevice};

/// A television.
///
/// Volume and channel steps go through [`RangeRegulator`]s, so stepping past
/// a bound leaves the level where it is. Steps are not gated on the device
/// status.
///
/// # Examples
///
/// ```
/// use smart_home::device::{SmartDevice, SmartTv};
/// use smart_home::types::DeviceStatus;
///
/// let mut tv = SmartTv::new("Android TV", "Entertainment", DeviceStatus::Online);
/// assert_eq!(tv.volume(), 10);
/// assert_eq!(tv.channel(), 1);
///
/// tv.previous_channel();
/// assert_eq!(tv.channel(), 1);
///
/// let event = tv.increase_speaker_volume();
/// assert_eq!(event.to_string(), "Speaker volume increased to 11.");
/// ```
#[derive(Debug)]
pub struct SmartTv {
    core: DeviceCore,
    volume: RangeRegulator<u8>,
    channel: RangeRegulator<u16>,
}

impl SmartTv {
    /// Default speaker volume.
    pub const DEFAULT_VOLUME: u8 = 10;
    /// Default volume bounds.
    pub const VOLUME_RANGE: (u8, u8) = (0, 100);
    /// Default channel.
    pub const DEFAULT_CHANNEL: u16 = 1;
    /// Default channel bounds.
    pub const CHANNEL_RANGE: (u16, u16) = (1, 200);

    /// Creates a TV with the default volume and channel settings.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, status: DeviceStatus) -> Self {
        let (vmin, vmax) = Self::VOLUME_RANGE;
        let (cmin, cmax) = Self::CHANNEL_RANGE;
        Self::with_levels(
            name,
            category,
            status,
            RangeRegulator::clamped(Self::DEFAULT_VOLUME, vmin, vmax),
            RangeRegulator::clamped(Self::DEFAULT_CHANNEL, cmin, cmax),
        )
    }

    /// Creates a TV with custom volume and channel regulators.
    #[must_use]
    pub fn with_levels(
        name: impl Into<String>,
        category: impl Into<String>,
        status: DeviceStatus,
        volume: RangeRegulator<u8>,
        channel: RangeRegulator<u16>,
    ) -> Self {
        Self {
            core: DeviceCore::new(name, category, status),
            volume,
            channel,
        }
    }

    /// Current speaker volume.
    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume.get()
    }

    /// Current channel number.
    #[must_use]
    pub fn channel(&self) -> u16 {
        self.channel.get()
    }

    /// Raises the volume by one.
    pub fn increase_speaker_volume(&mut self) -> DeviceEvent {
        self.volume.set(self.volume.get().saturating_add(1));
        self.level_changed(StateChange::volume(Direction::Up, self.volume.get()))
    }

    /// Lowers the volume by one.
    pub fn decrease_speaker_volume(&mut self) -> DeviceEvent {
        self.volume.set(self.volume.get().saturating_sub(1));
        self.level_changed(StateChange::volume(Direction::Down, self.volume.get()))
    }

    /// Switches to the next channel.
    pub fn next_channel(&mut self) -> DeviceEvent {
        self.channel.set(self.channel.get().saturating_add(1));
        self.level_changed(StateChange::channel(Direction::Up, self.channel.get()))
    }

    /// Switches to the previous channel. There is no wraparound.
    pub fn previous_channel(&mut self) -> DeviceEvent {
        self.channel.set(self.channel.get().saturating_sub(1));
        self.level_changed(StateChange::channel(Direction::Down, self.channel.get()))
    }

    fn level_changed(&self, change: StateChange) -> DeviceEvent {
        self.core
            .emit(DeviceEvent::level_changed(self.core.id(), change))
    }
}

impl SmartDevice for SmartTv {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::SmartTv
    }

    fn snapshot(&self) -> DeviceState {
        DeviceState {
            volume: Some(self.volume.get()),
            channel: Some(self.channel.get()),
            ..self.core.snapshot(self.kind())
        }
    }
}

impl Subscribable for SmartTv {
    fn callbacks(&self) -> &CallbackRegistry {
        self.core.callbacks()
    }
}
