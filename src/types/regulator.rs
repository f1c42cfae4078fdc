// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded value holder used for volume, channel and brightness levels.
//!
//! A [`RangeRegulator`] owns a value together with an inclusive
//! `[min, max]` range. Writes outside the range are dropped without an
//! error, so the stored value never leaves the range once constructed.

use std::fmt;

use crate::error::ValueError;

/// A value constrained to an inclusive range.
///
/// Writes outside the range are ignored. Callers cannot tell a rejected
/// write from a write of the current value.
///
/// # Examples
///
/// ```
/// use smart_home::types::RangeRegulator;
///
/// let mut volume = RangeRegulator::new(10_u8, 0, 100).unwrap();
/// volume.set(42);
/// assert_eq!(volume.get(), 42);
///
/// // Out of range: silently ignored
/// volume.set(101);
/// assert_eq!(volume.get(), 42);
///
/// // Bounds are validated at construction
/// assert!(RangeRegulator::new(0_u8, 1, 200).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RangeRegulator<T> {
    value: T,
    min: T,
    max: T,
}

impl<T> RangeRegulator<T>
where
    T: Copy + PartialOrd + Into<i64>,
{
    /// Creates a regulator holding `initial` within `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidRange` if `min > max`, or
    /// `ValueError::OutOfRange` if `initial` lies outside the bounds.
    pub fn new(initial: T, min: T, max: T) -> Result<Self, ValueError> {
        if min > max {
            return Err(ValueError::InvalidRange {
                min: min.into(),
                max: max.into(),
            });
        }
        if initial < min || initial > max {
            return Err(ValueError::OutOfRange {
                min: min.into(),
                max: max.into(),
                actual: initial.into(),
            });
        }
        Ok(Self {
            value: initial,
            min,
            max,
        })
    }

    /// Creates a regulator, clamping `initial` into the bounds.
    ///
    /// Inverted bounds are swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use smart_home::types::RangeRegulator;
    ///
    /// let channel = RangeRegulator::clamped(0_u16, 1, 200);
    /// assert_eq!(channel.get(), 1);
    ///
    /// let swapped = RangeRegulator::clamped(50_u8, 100, 0);
    /// assert_eq!((swapped.min(), swapped.max()), (0, 100));
    /// ```
    #[must_use]
    pub fn clamped(initial: T, min: T, max: T) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let value = if initial < min {
            min
        } else if initial > max {
            max
        } else {
            initial
        };
        Self { value, min, max }
    }

    /// Returns the stored value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }

    /// Stores `value` if it lies within `[min, max]`.
    ///
    /// Out-of-range values leave the stored value untouched.
    pub fn set(&mut self, value: T) {
        if self.contains(value) {
            self.value = value;
        } else {
            let (requested, min, max): (i64, i64, i64) =
                (value.into(), self.min.into(), self.max.into());
            tracing::debug!(requested, min, max, "Ignoring out-of-range write");
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: fmt::Display> fmt::Display for RangeRegulator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}..={}]", self.value, self.min, self.max)
    }
}
