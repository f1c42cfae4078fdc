// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that report device events.

use crate::event::{DeviceEvent, DeviceId};
use crate::state::StateChange;
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::types::DeviceStatus;

/// Trait for types that support event subscriptions.
///
/// Implementors only expose their [`CallbackRegistry`]; the subscription
/// methods forward to it.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// use smart_home::device::{SmartDevice, SmartLight};
/// use smart_home::subscription::Subscribable;
/// use smart_home::types::DeviceStatus;
///
/// let mut light = SmartLight::new("Google Light", "Utility", DeviceStatus::Offline);
///
/// let steps = Arc::new(AtomicU32::new(0));
/// let steps_clone = steps.clone();
/// let sub_id = light.on_level_changed(move |_change| {
///     steps_clone.fetch_add(1, Ordering::SeqCst);
/// });
///
/// light.increase_brightness();
/// assert_eq!(steps.load(Ordering::SeqCst), 1);
///
/// assert!(light.unsubscribe(sub_id));
/// ```
pub trait Subscribable {
    /// Registry the subscriptions are stored in.
    fn callbacks(&self) -> &CallbackRegistry;

    /// Subscribes to every event.
    fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceEvent) + Send + Sync + 'static,
    {
        self.callbacks().on_event(callback)
    }

    /// Subscribes to turn on/off transitions.
    fn on_status_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(DeviceId, DeviceStatus) + Send + Sync + 'static,
    {
        self.callbacks().on_status_changed(callback)
    }

    /// Subscribes to volume, channel and brightness steps.
    fn on_level_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.callbacks().on_level_changed(callback)
    }

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks().unsubscribe(id)
    }
}
