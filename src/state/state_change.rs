// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Level change representation.
//!
//! A [`StateChange`] records the outcome of a single step on one of the
//! regulated levels of a device. The reported level is the value stored
//! after the step, which equals the previous value when the regulator
//! rejected the write.
//!
//! # Examples
//!
//! ```
//! use smart_home::state::{Direction, StateChange};
//!
//! let change = StateChange::volume(Direction::Up, 14);
//! assert_eq!(change.to_string(), "Speaker volume increased to 14.");
//! ```

use std::fmt;

use serde::Serialize;

/// Direction of a single level step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Step towards the upper bound.
    Up,
    /// Step towards the lower bound.
    Down,
}

impl Direction {
    /// Verb used in console lines.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Up => "increased",
            Self::Down => "decreased",
        }
    }
}

/// A step applied to one of a device's regulated levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum StateChange {
    /// Speaker volume stepped.
    Volume {
        /// Requested direction.
        direction: Direction,
        /// Volume after the step.
        value: u8,
    },

    /// Channel number stepped.
    Channel {
        /// Requested direction.
        direction: Direction,
        /// Channel after the step.
        value: u16,
    },

    /// Brightness stepped.
    Brightness {
        /// Requested direction.
        direction: Direction,
        /// Brightness after the step.
        value: u8,
    },
}

impl StateChange {
    /// Creates a volume change.
    #[must_use]
    pub fn volume(direction: Direction, value: u8) -> Self {
        Self::Volume { direction, value }
    }

    /// Creates a channel change.
    #[must_use]
    pub fn channel(direction: Direction, value: u16) -> Self {
        Self::Channel { direction, value }
    }

    /// Creates a brightness change.
    #[must_use]
    pub fn brightness(direction: Direction, value: u8) -> Self {
        Self::Brightness { direction, value }
    }

    /// Returns the direction of the step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self {
            Self::Volume { direction, .. }
            | Self::Channel { direction, .. }
            | Self::Brightness { direction, .. } => *direction,
        }
    }

    /// Returns the level after the step, widened to `u16`.
    #[must_use]
    pub fn value(&self) -> u16 {
        match self {
            Self::Volume { value, .. } | Self::Brightness { value, .. } => u16::from(*value),
            Self::Channel { value, .. } => *value,
        }
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Volume { .. } => "Speaker volume",
            Self::Channel { .. } => "Channel number",
            Self::Brightness { .. } => "Brightness",
        };
        write!(f, "{label} {} to {}.", self.direction().verb(), self.value())
    }
}
