// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for device event subscriptions.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::event::{DeviceEvent, DeviceId};
use crate::state::StateChange;
use crate::types::DeviceStatus;

/// Unique identifier for a subscription.
///
/// IDs increase monotonically within a registry, and callbacks of the same
/// kind are invoked in subscription order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for callbacks receiving every event.
type EventCallback = Arc<dyn Fn(&DeviceEvent) + Send + Sync>;

/// Type alias for status transition callbacks.
type StatusCallback = Arc<dyn Fn(DeviceId, DeviceStatus) + Send + Sync>;

/// Type alias for level change callbacks.
type LevelCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;

/// Registry for device event callbacks.
///
/// Uses `parking_lot::RwLock` so a registry can be shared behind an `Arc`.
/// Callbacks must not subscribe or unsubscribe on the registry that is
/// dispatching to them.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Callbacks receiving every event.
    event_callbacks: RwLock<BTreeMap<SubscriptionId, EventCallback>>,
    /// Status transition callbacks.
    status_callbacks: RwLock<BTreeMap<SubscriptionId, StatusCallback>>,
    /// Level change callbacks.
    level_callbacks: RwLock<BTreeMap<SubscriptionId, LevelCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            event_callbacks: RwLock::new(BTreeMap::new()),
            status_callbacks: RwLock::new(BTreeMap::new()),
            level_callbacks: RwLock::new(BTreeMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback receiving every event.
    pub fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceEvent) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.event_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for turn on/off transitions.
    ///
    /// The callback receives the device ID and its new status.
    pub fn on_status_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(DeviceId, DeviceStatus) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.status_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for volume, channel and brightness steps.
    pub fn on_level_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.level_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.event_callbacks.write().remove(&id).is_some()
            || self.status_callbacks.write().remove(&id).is_some()
            || self.level_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.event_callbacks.write().clear();
        self.status_callbacks.write().clear();
        self.level_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatches an event to the relevant callbacks.
    ///
    /// Generic event callbacks run first, then the callbacks matching the
    /// event kind.
    pub fn dispatch(&self, event: &DeviceEvent) {
        for callback in self.event_callbacks.read().values() {
            callback(event);
        }

        if let Some(status) = event.status_change() {
            let device_id = event.device_id();
            for callback in self.status_callbacks.read().values() {
                callback(device_id, status);
            }
        }

        if let DeviceEvent::LevelChanged { change, .. } = event {
            for callback in self.level_callbacks.read().values() {
                callback(change);
            }
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.event_callbacks.read().len()
            + self.status_callbacks.read().len()
            + self.level_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DeviceState, Direction};
    use crate::types::DeviceKind;
    use std::sync::atomic::AtomicU32;

    fn turned_on() -> DeviceEvent {
        DeviceEvent::TurnedOn {
            state: DeviceState {
                id: DeviceId::new(),
                name: "Lamp".to_string(),
                category: "Utility".to_string(),
                kind: DeviceKind::Unknown,
                status: DeviceStatus::Online,
                volume: None,
                channel: None,
                brightness: None,
            },
        }
    }

    #[test]
    fn subscription_id_display() {
        assert_eq!(SubscriptionId::new(42).to_string(), "Sub(42)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn registry_event_callback() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let id = registry.on_event(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(registry.callback_count(), 1);

        registry.dispatch(&turned_on());
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        assert!(registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.dispatch(&turned_on());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_status_callback_only_for_transitions() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(Vec::new()));
        let received_clone = received.clone();

        registry.on_status_changed(move |_id, status| {
            received_clone.write().push(status);
        });

        registry.dispatch(&turned_on());
        registry.dispatch(&DeviceEvent::level_changed(
            DeviceId::new(),
            StateChange::volume(Direction::Up, 11),
        ));

        assert_eq!(*received.read(), vec![DeviceStatus::Online]);
    }

    #[test]
    fn registry_level_callback() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<StateChange>));
        let received_clone = received.clone();

        registry.on_level_changed(move |change| {
            *received_clone.write() = Some(*change);
        });

        let change = StateChange::brightness(Direction::Down, 14);
        registry.dispatch(&DeviceEvent::level_changed(DeviceId::new(), change));
        assert_eq!(*received.read(), Some(change));

        registry.dispatch(&turned_on());
        assert_eq!(*received.read(), Some(change));
    }

    #[test]
    fn registry_dispatches_in_subscription_order() {
        let registry = CallbackRegistry::new();
        let order = Arc::new(RwLock::new(Vec::new()));

        for n in 0..5 {
            let order = order.clone();
            registry.on_event(move |_| order.write().push(n));
        }

        registry.dispatch(&turned_on());
        assert_eq!(*order.read(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn registry_unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn registry_clear() {
        let registry = CallbackRegistry::new();
        registry.on_event(|_| {});
        registry.on_status_changed(|_, _| {});
        registry.on_level_changed(|_| {});
        assert_eq!(registry.callback_count(), 3);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_unique_ids() {
        let registry = CallbackRegistry::new();
        let id1 = registry.on_event(|_| {});
        let id2 = registry.on_status_changed(|_, _| {});
        let id3 = registry.on_level_changed(|_| {});

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert!(id1 < id2 && id2 < id3);
    }

    #[test]
    fn registry_debug() {
        let registry = CallbackRegistry::new();
        registry.on_event(|_| {});

        let debug = format!("{registry:?}");
        assert!(debug.contains("CallbackRegistry"));
        assert!(debug.contains("callback_count: 1"));
    }
}
