// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart Home - a small model of smart devices and a home that drives them.
//!
//! # Contents
//!
//! - **Devices**: [`SmartTv`] with speaker volume and channel, [`SmartLight`]
//!   with brightness, both built on the [`SmartDevice`] trait
//! - **Bounded values**: [`RangeRegulator`] silently ignores writes outside
//!   its range
//! - **Home**: [`SmartHome`] forwards operations to one TV and one light and
//!   counts turn-on calls
//! - **Events**: every operation returns a [`DeviceEvent`] whose `Display` is
//!   the human-readable line, and dispatches it to subscribers
//! - **Trick-or-treat**: a small demo of functions as values in [`treat`]
//!
//! # Quick Start
//!
//! ```
//! use smart_home::{SmartHome, Subscribable};
//!
//! let mut home = SmartHome::default();
//! home.on_event(|event| println!("{event}"));
//!
//! home.turn_on_tv();
//! home.increase_tv_volume();
//! home.turn_on_light();
//! home.turn_off_all_devices();
//! assert_eq!(home.device_turn_on_count(), 0);
//! ```
//!
//! # Configuration
//!
//! [`HomeConfig`] loads device names, initial status and level bounds from an
//! optional TOML file. See [`config`].

pub mod command;
pub mod config;
pub mod console;
pub mod device;
pub mod error;
pub mod event;
pub mod home;
pub mod logging;
pub mod state;
pub mod subscription;
pub mod treat;
pub mod types;

pub use command::HomeCommand;
pub use config::HomeConfig;
pub use device::{BasicDevice, SmartDevice, SmartLight, SmartTv};
pub use error::{ConfigError, Error, Result, ValueError};
pub use event::{DeviceEvent, DeviceId};
pub use home::SmartHome;
pub use state::{DeviceState, StateChange};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{DeviceKind, DeviceStatus, RangeRegulator};
