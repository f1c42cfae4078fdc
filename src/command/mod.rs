// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home command definitions.
//!
//! | Command | Name | Device |
//! |---------|------|--------|
//! | [`HomeCommand::TurnOnTv`] / [`HomeCommand::TurnOffTv`] | `turn-on-tv` / `turn-off-tv` | TV |
//! | [`HomeCommand::IncreaseTvVolume`] / [`HomeCommand::DecreaseTvVolume`] | `volume-up` / `volume-down` | TV |
//! | [`HomeCommand::NextChannel`] / [`HomeCommand::PreviousChannel`] | `channel-next` / `channel-previous` | TV |
//! | [`HomeCommand::TurnOnLight`] / [`HomeCommand::TurnOffLight`] | `turn-on-light` / `turn-off-light` | Light |
//! | [`HomeCommand::IncreaseBrightness`] / [`HomeCommand::DecreaseBrightness`] | `brightness-up` / `brightness-down` | Light |
//! | [`HomeCommand::TvInfo`] / [`HomeCommand::LightInfo`] | `tv-info` / `light-info` | Either |
//! | [`HomeCommand::TurnOffAll`] | `turn-off-all` | Both |

mod home;

pub use home::HomeCommand;
