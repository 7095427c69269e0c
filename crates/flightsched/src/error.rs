//! Error types for flightsched.
//!
//! This module defines all error types used throughout the flightsched crate.
//! Every failure a schedule operation can hit is surfaced as a variant here so
//! callers (and tests) can match on it instead of scraping printed text.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightsched operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Schedule Errors ===
    /// A record is missing one of its required fields.
    #[error("invalid flight data: {field} must not be empty")]
    InvalidRecord {
        /// Name of the empty field.
        field: &'static str,
    },

    /// No record with the given flight number exists.
    #[error("flight not found: {flight_number}")]
    FlightNotFound {
        /// The flight number that was looked up.
        flight_number: String,
    },

    /// A record with the same flight number is already scheduled.
    #[error("flight {flight_number} is already scheduled")]
    DuplicateFlight {
        /// The conflicting flight number.
        flight_number: String,
    },

    // === Input Errors ===
    /// The search date could not be parsed.
    #[error("date format incorrect: '{input}' (expected 'mmm dd yyyy', e.g. 'Sep 18 2024')")]
    DateFormat {
        /// The rejected input.
        input: String,
    },

    /// A departure or arrival timestamp could not be parsed.
    #[error("invalid timestamp '{input}': {reason}")]
    TimestampParse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A comma-separated flag value had the wrong number of fields.
    #[error("--{flag} expects {expected} comma-separated fields, got {found}")]
    MalformedInput {
        /// The flag name, without leading dashes.
        flag: &'static str,
        /// Number of fields required.
        expected: usize,
        /// Number of fields supplied.
        found: usize,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Seed Errors ===
    /// The seed file could not be decoded.
    #[error("failed to load seed file {path}: {source}")]
    SeedLoad {
        /// Path to the seed file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === I/O Errors ===
    /// File system or output stream operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flightsched operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a flight-not-found error.
    #[must_use]
    pub fn not_found(flight_number: impl Into<String>) -> Self {
        Self::FlightNotFound {
            flight_number: flight_number.into(),
        }
    }

    /// Create a timestamp parse error.
    #[must_use]
    pub fn timestamp(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TimestampParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Short machine-readable name for this error, used in JSON output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRecord { .. } => "invalid_record",
            Self::FlightNotFound { .. } => "flight_not_found",
            Self::DuplicateFlight { .. } => "duplicate_flight",
            Self::DateFormat { .. } => "date_format",
            Self::TimestampParse { .. } => "timestamp_parse",
            Self::MalformedInput { .. } => "malformed_input",
            Self::ConfigLoad(_) | Self::ConfigValidation { .. } => "config",
            Self::SeedLoad { .. } => "seed",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }

    /// Check if this error means the target flight does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FlightNotFound { .. })
    }
}
