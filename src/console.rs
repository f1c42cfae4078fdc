// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line-oriented output sink.
//!
//! The trick-or-treat actions print through a [`Console`] instead of
//! `println!` directly, so tests can capture their output with
//! [`BufferConsole`].

use std::io::Write;

use parking_lot::Mutex;

/// Destination for demo output lines.
pub trait Console: Send + Sync {
    /// Writes one line.
    fn print_line(&self, line: &str);
}

/// Writes lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{line}") {
            tracing::warn!(error = %err, "Failed to write to stdout");
        }
    }
}

/// Collects lines in memory.
///
/// ```
/// use smart_home::console::{BufferConsole, Console};
///
/// let console = BufferConsole::new();
/// console.print_line("Have a treat!");
/// assert_eq!(console.lines(), vec!["Have a treat!"]);
/// ```
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Removes and returns the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Console for BufferConsole {
    fn print_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
