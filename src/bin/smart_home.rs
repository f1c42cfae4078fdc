// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drives a smart home from the command line.
//!
//! ```text
//! smart_home                         # run the built-in demo
//! smart_home turn-on-tv volume-up    # run the given commands in order
//! smart_home --json tv-info          # info lines as JSON
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use smart_home::config::DEFAULT_CONFIG_FILE;
use smart_home::console::{Console, StdoutConsole};
use smart_home::{HomeCommand, HomeConfig, SmartHome, Subscribable};

#[derive(Debug, Parser)]
#[command(version, about = "Smart home device demo")]
struct Cli {
    /// Configuration file (optional; defaults apply when missing).
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print device information as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Commands to run, e.g. `turn-on-tv volume-up tv-info`.
    commands: Vec<HomeCommand>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = HomeConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    smart_home::logging::init(&config.logging.filter, cli.verbose)?;

    let mut home = SmartHome::from_config(&config)?;
    let json = cli.json;
    let console = StdoutConsole;
    home.on_event(move |event| console.print_line(&event.render(json)));

    let commands = if cli.commands.is_empty() {
        HomeCommand::DEMO.to_vec()
    } else {
        cli.commands
    };

    for command in commands {
        home.execute(command);
    }

    tracing::info!(
        device_turn_on_count = home.device_turn_on_count(),
        "Done"
    );
    Ok(())
}
