// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for device events.
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Registry that stores callbacks and dispatches events
//! - [`Subscribable`] - Trait for types that support event subscriptions
//!
//! Devices and the [`SmartHome`](crate::home::SmartHome) each own a registry.
//! The binaries subscribe a callback that prints every event, which is how
//! the console lines reach standard output.
//!
//! ```
//! use smart_home::home::SmartHome;
//! use smart_home::subscription::Subscribable;
//!
//! let mut home = SmartHome::default();
//! home.on_event(|event| println!("{event}"));
//! home.turn_on_tv();
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
