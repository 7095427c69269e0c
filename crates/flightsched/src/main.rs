//! `fsched` - CLI for flightsched
//!
//! This binary builds a flight schedule, applies the add, search, edit, and
//! delete operations given as flags, and prints the outcome of each.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::debug;

use flightsched::cli::{self, Cli};
use flightsched::{init_logging, seed, Config, Reporter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration, then let flags override it
    let mut config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    cli.apply_to(&mut config);

    if cli.ops.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let mut store = seed::build_store(&config).context("building the initial schedule")?;
    let mut reporter = Reporter::new(io::stdout().lock(), config.output.format);

    let outcome = cli::run(&cli.ops, &mut store, &mut reporter)?;
    debug!(?outcome, flights = store.len(), "Done");
    Ok(())
}
