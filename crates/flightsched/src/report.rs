//! User-facing output for schedule operations.
//!
//! The store returns typed results; [`Reporter`] turns those results into
//! the lines a user sees, either as plain text or as one JSON object per line.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flight::FlightRecord;

/// Usage hint printed when `--add` has the wrong number of fields.
pub const ADD_USAGE: &str = "Something went wrong, be sure to enter five pieces of information \
separated by commas using the order 'FlightNumber,Origin,Destination,Departure,Arrival'";

/// Usage hint printed when `--edit` has the wrong number of fields.
pub const EDIT_USAGE: &str = "Invalid entry - enter the flight number you wish to alter followed \
by the revised input (example: AC 101,AC 402,YYC,YUL,Sep 18 2024 14:00 MST,Sep 18 2024 19:30 EST)";

/// Hint printed when `--search-date` cannot be parsed.
pub const DATE_HINT: &str =
    "Date format incorrect - please use 'mmm dd yyyy' (example: 'Sep 18 2024')";

/// Output format for reported results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// The operation a reported failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `--add`
    Add,
    /// `--search-date`
    Search,
    /// `--edit`
    Edit,
    /// `--delete`
    Delete,
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Added {
        flight: &'a FlightRecord,
    },
    Search {
        date: &'a str,
        origin: &'a str,
        destination: &'a str,
    },
    Match {
        flight: &'a FlightRecord,
    },
    Updated {
        flight_number: &'a str,
        flight: &'a FlightRecord,
    },
    Deleted {
        flight: &'a FlightRecord,
    },
    Error {
        kind: &'static str,
        message: String,
    },
}

/// Writes operation outcomes to an output stream.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out` in the given format.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Consume the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The configured output format.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Report a flight that was added.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn added(&mut self, flight: &FlightRecord) -> Result<()> {
        self.emit(&Event::Added { flight }, "Flight added successfully.")
    }

    /// Echo the search parameters as they were given.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn search_header(&mut self, date: &str, origin: &str, destination: &str) -> Result<()> {
        let plain = format!(
            "You have asked to search for flights on {date} from {origin} to {destination}"
        );
        self.emit(
            &Event::Search {
                date,
                origin,
                destination,
            },
            &plain,
        )
    }

    /// Report one flight matched by a search.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn search_match(&mut self, flight: &FlightRecord) -> Result<()> {
        self.emit(&Event::Match { flight }, &flight.to_string())
    }

    /// Report a flight that was replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn updated(&mut self, flight_number: &str, flight: &FlightRecord) -> Result<()> {
        self.emit(
            &Event::Updated {
                flight_number,
                flight,
            },
            "Flight updated successfully.",
        )
    }

    /// Report a flight that was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn deleted(&mut self, flight: &FlightRecord) -> Result<()> {
        self.emit(&Event::Deleted { flight }, "Flight deleted successfully.")
    }

    /// Report a failed operation.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn failure(&mut self, operation: Operation, err: &Error) -> Result<()> {
        let message = failure_message(operation, err);
        self.emit(
            &Event::Error {
                kind: err.kind(),
                message: message.clone(),
            },
            &message,
        )
    }

    fn emit(&mut self, event: &Event<'_>, plain: &str) -> Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{plain}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

/// The message shown to a user for a failed operation.
#[must_use]
pub fn failure_message(operation: Operation, err: &Error) -> String {
    match (operation, err) {
        (Operation::Add, Error::MalformedInput { .. }) => ADD_USAGE.to_string(),
        (_, Error::MalformedInput { .. }) => EDIT_USAGE.to_string(),
        (_, Error::DateFormat { .. }) => DATE_HINT.to_string(),
        (Operation::Delete, Error::FlightNotFound { .. }) => {
            "That flight number does not correspond to any currently scheduled flights."
                .to_string()
        }
        (_, Error::FlightNotFound { .. }) => "Flight not found.".to_string(),
        (_, Error::InvalidRecord { field }) => {
            format!("Invalid flight data - {field} must not be empty.")
        }
        (_, Error::DuplicateFlight { flight_number }) => {
            format!("Flight {flight_number} is already scheduled.")
        }
        (_, Error::TimestampParse { input, reason }) => {
            format!("Could not read timestamp '{input}': {reason}")
        }
        (_, other) => other.to_string(),
    }
}
