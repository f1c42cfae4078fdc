// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Trick-or-treat: functions as values.
//!
//! [`trick_or_treat`] is a higher-order function: it takes an optional
//! extra-treat function and returns an [`Action`] to be invoked later.
//!
//! ```
//! use std::sync::Arc;
//! use smart_home::console::{BufferConsole, Console};
//! use smart_home::treat::{coins, trick_or_treat};
//!
//! let buffer = Arc::new(BufferConsole::new());
//! let console: Arc<dyn Console> = buffer.clone();
//!
//! let treat = trick_or_treat(&console, false, Some(&coins));
//! let trick = trick_or_treat(&console, true, None);
//! treat();
//! trick();
//!
//! assert_eq!(buffer.lines(), vec!["5 coins", "Have a treat!", "No treats!"]);
//! ```

use std::sync::Arc;

use crate::console::Console;

/// A deferred zero-argument action.
pub type Action = Box<dyn Fn()>;

/// Quantity handed to the extra treat.
pub const EXTRA_TREAT_QUANTITY: u32 = 5;

/// Default number of demo iterations.
pub const DEFAULT_ITERATIONS: u32 = 10;

/// Returns the trick action, or prints the extra treat and returns the treat
/// action.
///
/// The extra treat runs immediately with [`EXTRA_TREAT_QUANTITY`]; only the
/// returned action is deferred.
pub fn trick_or_treat(
    console: &Arc<dyn Console>,
    is_trick: bool,
    extra_treat: Option<&dyn Fn(u32) -> String>,
) -> Action {
    if is_trick {
        return trick(console);
    }
    if let Some(extra_treat) = extra_treat {
        console.print_line(&extra_treat(EXTRA_TREAT_QUANTITY));
    }
    treat(console)
}

/// `"{quantity} coins"`.
#[must_use]
pub fn coins(quantity: u32) -> String {
    format!("{quantity} coins")
}

/// Always `"Have a cupcake!"`.
#[must_use]
pub fn cupcakes(_quantity: u32) -> String {
    "Have a cupcake!".to_string()
}

fn printer(console: &Arc<dyn Console>, line: &'static str) -> Action {
    let console = Arc::clone(console);
    Box::new(move || console.print_line(line))
}

/// Prints "Have a treat!".
#[must_use]
pub fn treat(console: &Arc<dyn Console>) -> Action {
    printer(console, "Have a treat!")
}

/// Prints "No treats!".
#[must_use]
pub fn trick(console: &Arc<dyn Console>) -> Action {
    printer(console, "No treats!")
}

/// Prints "Other trick!".
#[must_use]
pub fn other_trick(console: &Arc<dyn Console>) -> Action {
    printer(console, "Other trick!")
}

/// Prints "This a function".
pub fn any_function(console: &dyn Console) {
    console.print_line("This a function");
}

/// Runs the demo sequence.
///
/// Builds a treat with [`coins`] and a trick, invokes both, then invokes an
/// inline treat once and again on each of `iterations` numbered iterations.
pub fn run_demo(console: &Arc<dyn Console>, iterations: u32) {
    let inline_coins = |quantity: u32| format!("{quantity} coins");

    let treat_function = trick_or_treat(console, false, Some(&coins));
    let trick_function = trick_or_treat(console, true, None);

    treat_function();
    trick_function();

    let other_treat_function = trick_or_treat(console, false, Some(&inline_coins));
    other_treat_function();

    for i in 0..iterations {
        console.print_line(&format!("This is iteration #{i}"));
        trick_or_treat(console, false, Some(&inline_coins))();
    }
    tracing::debug!(iterations, "Demo finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    fn consoles() -> (Arc<BufferConsole>, Arc<dyn Console>) {
        let buffer = Arc::new(BufferConsole::new());
        let console: Arc<dyn Console> = buffer.clone();
        (buffer, console)
    }

    #[test]
    fn trick_ignores_extra_treat() {
        let (buffer, console) = consoles();
        let action = trick_or_treat(&console, true, Some(&cupcakes));
        assert!(buffer.lines().is_empty());
        action();
        assert_eq!(buffer.lines(), vec!["No treats!"]);
    }

    #[test]
    fn extra_treat_printed_before_action_runs() {
        let (buffer, console) = consoles();
        let action = trick_or_treat(&console, false, Some(&cupcakes));
        assert_eq!(buffer.lines(), vec!["Have a cupcake!"]);
        action();
        action();
        assert_eq!(
            buffer.lines(),
            vec!["Have a cupcake!", "Have a treat!", "Have a treat!"]
        );
    }

    #[test]
    fn treat_without_extra() {
        let (buffer, console) = consoles();
        trick_or_treat(&console, false, None)();
        assert_eq!(buffer.lines(), vec!["Have a treat!"]);
    }

    #[test]
    fn stored_functions() {
        let (buffer, console) = consoles();
        let stored: fn(&dyn Console) = any_function;
        stored(console.as_ref());
        other_trick(&console)();
        assert_eq!(buffer.lines(), vec!["This a function", "Other trick!"]);
        assert_eq!(coins(3), "3 coins");
    }

    #[test]
    fn demo_sequence() {
        let (buffer, console) = consoles();
        run_demo(&console, 2);
        assert_eq!(
            buffer.lines(),
            vec![
                "5 coins",
                "Have a treat!",
                "No treats!",
                "5 coins",
                "Have a treat!",
                "This is iteration #0",
                "5 coins",
                "Have a treat!",
                "This is iteration #1",
                "5 coins",
                "Have a treat!",
            ]
        );
    }

    #[test]
    fn demo_without_iterations() {
        let (buffer, console) = consoles();
        run_demo(&console, 0);
        assert_eq!(buffer.lines().len(), 5);
    }
}
