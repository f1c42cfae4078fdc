// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runs the trick-or-treat demo.

use std::sync::Arc;

use clap::Parser;
use smart_home::console::{Console, StdoutConsole};
use smart_home::treat::{self, DEFAULT_ITERATIONS};

#[derive(Debug, Parser)]
#[command(version, about = "Trick-or-treat function values demo")]
struct Cli {
    /// Number of numbered treat iterations.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Log filter (`RUST_LOG` syntax).
    #[arg(long, env = "SMART_HOME_LOG", default_value = "smart_home=warn")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    smart_home::logging::init(&cli.log, false)?;

    let console: Arc<dyn Console> = Arc::new(StdoutConsole);
    treat::run_demo(&console, cli.iterations);
    Ok(())
}
