// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Façade operations as values.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ValueError;

/// One [`SmartHome`](crate::home::SmartHome) operation.
///
/// Commands parse from and display as kebab-case names, which makes them
/// usable as a command-line script.
///
/// # Examples
///
/// ```
/// use smart_home::command::HomeCommand;
///
/// let cmd: HomeCommand = "volume-up".parse().unwrap();
/// assert_eq!(cmd, HomeCommand::IncreaseTvVolume);
/// assert_eq!(cmd.to_string(), "volume-up");
///
/// assert!("volume-sideways".parse::<HomeCommand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeCommand {
    /// Turn the TV on.
    TurnOnTv,
    /// Turn the TV off.
    TurnOffTv,
    /// Raise the TV volume by one (only while online).
    IncreaseTvVolume,
    /// Lower the TV volume by one (only while online).
    DecreaseTvVolume,
    /// Switch to the next channel.
    NextChannel,
    /// Switch to the previous channel.
    PreviousChannel,
    /// Report TV information.
    TvInfo,
    /// Turn the light on.
    TurnOnLight,
    /// Turn the light off.
    TurnOffLight,
    /// Raise the light brightness by one.
    IncreaseBrightness,
    /// Lower the light brightness by one.
    DecreaseBrightness,
    /// Report light information.
    LightInfo,
    /// Turn both devices off.
    TurnOffAll,
}

impl HomeCommand {
    /// Every command, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::TurnOnTv,
        Self::TurnOffTv,
        Self::IncreaseTvVolume,
        Self::DecreaseTvVolume,
        Self::NextChannel,
        Self::PreviousChannel,
        Self::TvInfo,
        Self::TurnOnLight,
        Self::TurnOffLight,
        Self::IncreaseBrightness,
        Self::DecreaseBrightness,
        Self::LightInfo,
        Self::TurnOffAll,
    ];

    /// Built-in demo script: exercises every device operation and ends with
    /// a volume change on the switched-off TV, which is refused.
    pub const DEMO: [Self; 13] = [
        Self::TurnOnTv,
        Self::IncreaseTvVolume,
        Self::DecreaseTvVolume,
        Self::NextChannel,
        Self::PreviousChannel,
        Self::TvInfo,
        Self::TurnOnLight,
        Self::IncreaseBrightness,
        Self::DecreaseBrightness,
        Self::LightInfo,
        Self::TurnOffAll,
        Self::IncreaseTvVolume,
        Self::TurnOffTv,
    ];

    /// Returns the kebab-case command name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TurnOnTv => "turn-on-tv",
            Self::TurnOffTv => "turn-off-tv",
            Self::IncreaseTvVolume => "volume-up",
            Self::DecreaseTvVolume => "volume-down",
            Self::NextChannel => "channel-next",
            Self::PreviousChannel => "channel-previous",
            Self::TvInfo => "tv-info",
            Self::TurnOnLight => "turn-on-light",
            Self::TurnOffLight => "turn-off-light",
            Self::IncreaseBrightness => "brightness-up",
            Self::DecreaseBrightness => "brightness-down",
            Self::LightInfo => "light-info",
            Self::TurnOffAll => "turn-off-all",
        }
    }

    /// Names what the command acts on.
    ///
    /// A general label, defined for every command. `SmartHome` only refuses
    /// the two volume commands, so rejection lines only ever show
    /// "speaker volume".
    #[must_use]
    pub const fn target(&self) -> &'static str {
        match self {
            Self::TurnOnTv | Self::TurnOffTv | Self::TvInfo => "TV",
            Self::IncreaseTvVolume | Self::DecreaseTvVolume => "speaker volume",
            Self::NextChannel | Self::PreviousChannel => "channel number",
            Self::TurnOnLight | Self::TurnOffLight | Self::LightInfo => "light",
            Self::IncreaseBrightness | Self::DecreaseBrightness => "brightness",
            Self::TurnOffAll => "all devices",
        }
    }
}

impl fmt::Display for HomeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HomeCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for HomeCommand {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == wanted)
            .ok_or_else(|| ValueError::InvalidCommand(s.to_string()))
    }
}
