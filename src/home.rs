// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The smart home façade.
//!
//! A [`SmartHome`] owns one [`SmartTv`] and one [`SmartLight`] and forwards
//! operations to them. Every forwarded event is also dispatched to the
//! home's own callbacks, so subscribing to the home is enough to see
//! everything that happens in it.
//!
//! Volume changes are refused while the TV is not online. Channel and
//! brightness changes are forwarded whatever the device status.

use crate::command::HomeCommand;
use crate::config::HomeConfig;
use crate::device::{SmartDevice, SmartLight, SmartTv};
use crate::error::Result;
use crate::event::DeviceEvent;
use crate::subscription::{CallbackRegistry, Subscribable};
use crate::types::DeviceStatus;

/// A home with one TV and one light.
///
/// # Examples
///
/// ```
/// use smart_home::device::{SmartLight, SmartTv};
/// use smart_home::home::SmartHome;
/// use smart_home::types::DeviceStatus;
///
/// let mut home = SmartHome::new(
///     SmartTv::new("Android TV", "Entertainment", DeviceStatus::Offline),
///     SmartLight::new("Google Light", "Utility", DeviceStatus::Offline),
/// );
///
/// // Refused: the TV is offline
/// let event = home.increase_tv_volume();
/// assert!(event.is_rejection());
/// assert_eq!(home.tv().volume(), 10);
///
/// home.turn_on_tv();
/// home.increase_tv_volume();
/// assert_eq!(home.tv().volume(), 11);
/// assert_eq!(home.device_turn_on_count(), 1);
/// ```
#[derive(Debug)]
pub struct SmartHome {
    tv: SmartTv,
    light: SmartLight,
    device_turn_on_count: i32,
    callbacks: CallbackRegistry,
}

impl SmartHome {
    /// Creates a home owning the given devices.
    #[must_use]
    pub fn new(tv: SmartTv, light: SmartLight) -> Self {
        Self {
            tv,
            light,
            device_turn_on_count: 0,
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Creates a home from configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a configured level is not a valid range.
    pub fn from_config(config: &HomeConfig) -> Result<Self> {
        Ok(Self::new(config.tv.build()?, config.light.build()?))
    }

    /// The TV.
    #[must_use]
    pub fn tv(&self) -> &SmartTv {
        &self.tv
    }

    /// The light.
    #[must_use]
    pub fn light(&self) -> &SmartLight {
        &self.light
    }

    /// Number of turn-on calls minus turn-off calls.
    ///
    /// Maintained alongside the calls, not derived from device status: turning
    /// off a device that is already off still decrements it.
    #[must_use]
    pub fn device_turn_on_count(&self) -> i32 {
        self.device_turn_on_count
    }

    fn forward(&self, event: DeviceEvent) -> DeviceEvent {
        self.callbacks.dispatch(&event);
        event
    }

    // ========== TV ==========

    /// Turns the TV on.
    pub fn turn_on_tv(&mut self) -> DeviceEvent {
        self.device_turn_on_count += 1;
        let event = self.tv.turn_on();
        self.forward(event)
    }

    /// Turns the TV off.
    pub fn turn_off_tv(&mut self) -> DeviceEvent {
        self.device_turn_on_count -= 1;
        let event = self.tv.turn_off();
        self.forward(event)
    }

    /// Raises the TV volume if the TV is online.
    pub fn increase_tv_volume(&mut self) -> DeviceEvent {
        if self.tv.status() != DeviceStatus::Online {
            return self.reject_tv(HomeCommand::IncreaseTvVolume);
        }
        let event = self.tv.increase_speaker_volume();
        self.forward(event)
    }

    /// Lowers the TV volume if the TV is online.
    pub fn decrease_tv_volume(&mut self) -> DeviceEvent {
        if self.tv.status() != DeviceStatus::Online {
            return self.reject_tv(HomeCommand::DecreaseTvVolume);
        }
        let event = self.tv.decrease_speaker_volume();
        self.forward(event)
    }

    /// Switches the TV to the next channel.
    pub fn change_tv_channel_to_next(&mut self) -> DeviceEvent {
        let event = self.tv.next_channel();
        self.forward(event)
    }

    /// Switches the TV to the previous channel.
    pub fn change_tv_channel_to_previous(&mut self) -> DeviceEvent {
        let event = self.tv.previous_channel();
        self.forward(event)
    }

    /// Reports TV information.
    pub fn print_smart_tv_info(&self) -> DeviceEvent {
        self.forward(self.tv.device_info())
    }

    fn reject_tv(&self, command: HomeCommand) -> DeviceEvent {
        let status = self.tv.status();
        tracing::debug!(device = %self.tv.name(), %command, %status, "Command rejected");
        self.forward(DeviceEvent::CommandRejected {
            device_id: self.tv.id(),
            name: self.tv.name().to_string(),
            command,
            status,
        })
    }

    // ========== Light ==========

    /// Turns the light on.
    pub fn turn_on_light(&mut self) -> DeviceEvent {
        self.device_turn_on_count += 1;
        let event = self.light.turn_on();
        self.forward(event)
    }

    /// Turns the light off.
    pub fn turn_off_light(&mut self) -> DeviceEvent {
        self.device_turn_on_count -= 1;
        let event = self.light.turn_off();
        self.forward(event)
    }

    /// Raises the light brightness.
    pub fn increase_light_brightness(&mut self) -> DeviceEvent {
        let event = self.light.increase_brightness();
        self.forward(event)
    }

    /// Lowers the light brightness.
    pub fn decrease_light_brightness(&mut self) -> DeviceEvent {
        let event = self.light.decrease_brightness();
        self.forward(event)
    }

    /// Reports light information.
    pub fn print_smart_light_info(&self) -> DeviceEvent {
        self.forward(self.light.device_info())
    }

    // ========== Both ==========

    /// Turns the TV off, then the light.
    pub fn turn_off_all_devices(&mut self) -> Vec<DeviceEvent> {
        vec![self.turn_off_tv(), self.turn_off_light()]
    }

    /// Runs one command, returning the events it produced.
    pub fn execute(&mut self, command: HomeCommand) -> Vec<DeviceEvent> {
        tracing::trace!(%command, "Executing");
        let event = match command {
            HomeCommand::TurnOnTv => self.turn_on_tv(),
            HomeCommand::TurnOffTv => self.turn_off_tv(),
            HomeCommand::IncreaseTvVolume => self.increase_tv_volume(),
            HomeCommand::DecreaseTvVolume => self.decrease_tv_volume(),
            HomeCommand::NextChannel => self.change_tv_channel_to_next(),
            HomeCommand::PreviousChannel => self.change_tv_channel_to_previous(),
            HomeCommand::TvInfo => self.print_smart_tv_info(),
            HomeCommand::TurnOnLight => self.turn_on_light(),
            HomeCommand::TurnOffLight => self.turn_off_light(),
            HomeCommand::IncreaseBrightness => self.increase_light_brightness(),
            HomeCommand::DecreaseBrightness => self.decrease_light_brightness(),
            HomeCommand::LightInfo => self.print_smart_light_info(),
            HomeCommand::TurnOffAll => return self.turn_off_all_devices(),
        };
        vec![event]
    }
}

impl Default for SmartHome {
    fn default() -> Self {
        Self::new(
            SmartTv::new("Android TV", "Entertainment", DeviceStatus::Online),
            SmartLight::new("Google Light", "Utility", DeviceStatus::Online),
        )
    }
}

impl Subscribable for SmartHome {
    fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_home() -> SmartHome {
        SmartHome::new(
            SmartTv::new("Android TV", "Entertainment", DeviceStatus::Offline),
            SmartLight::new("Google Light", "Utility", DeviceStatus::Offline),
        )
    }

    #[test]
    fn volume_rejected_while_offline() {
        let mut home = offline_home();
        let event = home.increase_tv_volume();
        assert_eq!(home.tv().volume(), 10);
        assert_eq!(
            event.to_string(),
            "Android TV is offline; speaker volume not changed."
        );

        let event = home.decrease_tv_volume();
        assert!(event.is_rejection());
        assert_eq!(home.tv().volume(), 10);
    }

    #[test]
    fn volume_rejected_while_unknown() {
        let mut home = SmartHome::new(
            SmartTv::new("TV", "Entertainment", DeviceStatus::Unknown),
            SmartLight::new("Light", "Utility", DeviceStatus::Unknown),
        );
        let event = home.increase_tv_volume();
        assert_eq!(event.to_string(), "TV is unknown; speaker volume not changed.");
    }

    #[test]
    fn volume_applied_after_turn_on() {
        let mut home = offline_home();
        home.turn_on_tv();
        let event = home.increase_tv_volume();
        assert_eq!(home.tv().volume(), 11);
        assert_eq!(event.to_string(), "Speaker volume increased to 11.");
    }

    #[test]
    fn channel_and_brightness_are_not_guarded() {
        let mut home = offline_home();
        home.change_tv_channel_to_next();
        home.increase_light_brightness();
        assert_eq!(home.tv().channel(), 2);
        assert_eq!(home.light().brightness(), 1);

        home.change_tv_channel_to_previous();
        home.decrease_light_brightness();
        assert_eq!(home.tv().channel(), 1);
        assert_eq!(home.light().brightness(), 0);
    }

    #[test]
    fn counter_tracks_calls() {
        let mut home = offline_home();
        home.turn_on_tv();
        home.turn_on_light();
        assert_eq!(home.device_turn_on_count(), 2);
        home.turn_off_all_devices();
        assert_eq!(home.device_turn_on_count(), 0);
    }

    #[test]
    fn counter_drifts_from_device_state() {
        let mut home = offline_home();
        home.turn_off_tv();
        assert_eq!(home.device_turn_on_count(), -1);

        home.turn_on_light();
        home.turn_on_light();
        assert_eq!(home.device_turn_on_count(), 1);
        assert_eq!(home.light().status(), DeviceStatus::Online);
    }

    #[test]
    fn turn_off_all_reports_both_devices() {
        let mut home = SmartHome::default();
        let events = home.turn_off_all_devices();
        let lines: Vec<_> = events.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec!["Android TV turned off", "Google Light turned off"]
        );
        assert_eq!(home.tv().status(), DeviceStatus::Offline);
        assert_eq!(home.light().status(), DeviceStatus::Offline);
    }

    #[test]
    fn info_lines() {
        let home = SmartHome::default();
        assert_eq!(
            home.print_smart_tv_info().to_string(),
            "Device name: Android TV, category: Entertainment, type: Smart TV"
        );
        assert_eq!(
            home.print_smart_light_info().to_string(),
            "Device name: Google Light, category: Utility, type: Smart Light"
        );
    }

    #[test]
    fn from_config_rejects_invalid_levels() {
        use crate::error::{ConfigError, Error};

        let mut config = HomeConfig::default();
        config.tv.volume.initial = 120;
        assert!(matches!(
            SmartHome::from_config(&config),
            Err(Error::Config(ConfigError::Value {
                field: "tv.volume",
                ..
            }))
        ));
    }

    #[test]
    fn execute_maps_every_command() {
        let mut home = SmartHome::default();
        for command in HomeCommand::ALL {
            let expected = if command == HomeCommand::TurnOffAll { 2 } else { 1 };
            assert_eq!(home.execute(command).len(), expected, "{command}");
        }
    }

    #[test]
    fn home_subscribers_see_forwarded_and_rejected_events() {
        use parking_lot::Mutex;
        use std::sync::Arc;

        let mut home = offline_home();
        let lines = Arc::new(Mutex::new(Vec::new()));
        let lines_clone = lines.clone();
        home.on_event(move |event| lines_clone.lock().push(event.to_string()));

        home.increase_tv_volume();
        home.turn_on_tv();
        home.increase_tv_volume();

        assert_eq!(
            *lines.lock(),
            vec![
                "Android TV is offline; speaker volume not changed.".to_string(),
                "Android TV is turned on. Speaker volume is set to 10 and channel number is set to 1."
                    .to_string(),
                "Speaker volume increased to 11.".to_string(),
            ]
        );
    }
}
