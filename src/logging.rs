// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logging initialization for the binaries.
//!
//! Logs go to stderr so that standard output only carries the demo lines.

use tracing_subscriber::EnvFilter;

/// Directive added on top of the configured filter in verbose mode.
const VERBOSE_DIRECTIVE: &str = "smart_home=debug";

/// Installs a global `tracing` subscriber filtered by `filter`.
///
/// `verbose` forces `debug` level for this crate on top of the filter.
///
/// # Errors
///
/// Returns an error if the filter directive cannot be parsed or a global
/// subscriber is already installed.
pub fn init(filter: &str, verbose: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(filter, verbose)?)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    Ok(())
}

fn build_filter(filter: &str, verbose: bool) -> anyhow::Result<EnvFilter> {
    let env_filter = EnvFilter::try_new(filter)?;
    if verbose {
        return Ok(env_filter.add_directive(VERBOSE_DIRECTIVE.parse()?));
    }
    Ok(env_filter)
}
