// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the device model.
//!
//! # Types
//!
//! - [`RangeRegulator`] - Value held within an inclusive `[min, max]` range
//! - [`DeviceStatus`] - Offline/Online/Unknown connectivity status
//! - [`DeviceKind`] - Display tag for the concrete device variant

mod regulator;
mod status;

pub use regulator::RangeRegulator;
pub use status::{DeviceKind, DeviceStatus};
