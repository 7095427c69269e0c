//! Command-line interface for flightsched.
//!
//! This module provides the CLI structure, flag value parsing, and the
//! dispatcher that runs the requested operations for the `fsched` binary.

mod input;
mod run;

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::Config;
use crate::report::OutputFormat;

pub use input::{parse_add, parse_edit, EditRequest, ADD_FIELDS, EDIT_FIELDS};
pub use run::{run, Outcome};

/// fsched - Manage an in-memory flight schedule
///
/// Operations run in a fixed order within one invocation: add, search,
/// edit, delete. Timestamps are written as 'Mon DD YYYY HH:MM ZONE', for
/// example 'Sep 18 2024 15:00 PST'.
#[derive(Debug, Parser)]
#[command(name = "fsched")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format (overrides configuration)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Start from an empty schedule instead of the demo flights
    #[arg(long)]
    pub empty: bool,

    /// The schedule operations to perform
    #[command(flatten)]
    pub ops: Operations,
}

/// Schedule operations requested on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct Operations {
    /// Add a flight: 'FlightNumber,Origin,Destination,Departure,Arrival'
    #[arg(long, value_name = "FLIGHT")]
    pub add: Option<String>,

    /// Search flights departing on a date: 'Mon DD YYYY' (e.g. 'Sep 18 2024')
    #[arg(long, value_name = "DATE")]
    pub search_date: Option<String>,

    /// Only match flights from this origin
    #[arg(long, value_name = "CODE", default_value = "")]
    pub origin: String,

    /// Only match flights to this destination
    #[arg(long, value_name = "CODE", default_value = "")]
    pub destination: String,

    /// Replace a flight: 'FlightNumber,NewFlightNumber,NewOrigin,NewDestination,NewDeparture,NewArrival'
    #[arg(long, value_name = "FLIGHT")]
    pub edit: Option<String>,

    /// Delete a flight by flight number
    #[arg(long, value_name = "FLIGHT_NUMBER")]
    pub delete: Option<String>,
}

impl Operations {
    /// Check if no operation was requested.
    ///
    /// Flags given an empty value count as not given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.add, &self.search_date, &self.edit, &self.delete]
            .iter()
            .all(|flag| given(flag.as_deref()).is_none())
    }
}

/// A flag value, treating an empty string as absent.
pub(crate) fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.empty {
            config.schedule.seed_demo_flights = false;
        }
    }
}
