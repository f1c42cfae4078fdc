// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events reported by devices and the home.
//!
//! Each operation yields one [`DeviceEvent`], returned to the caller and
//! dispatched to the callbacks registered on the device (see
//! [`subscription`](crate::subscription)).

mod device_event;
mod device_id;

pub use device_event::DeviceEvent;
pub use device_id::DeviceId;
