//! `flightsched` - An in-memory flight schedule manager
//!
//! This library provides the flight record model, the schedule store with its
//! add, search, edit, and delete operations, and the command-line plumbing
//! used by the `fsched` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod report;
pub mod seed;
pub mod store;
pub mod timefmt;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::{FlightRecord, ZonedTime};
pub use logging::init_logging;
pub use report::{OutputFormat, Reporter};
pub use store::FlightStore;
