//! Initial schedule contents.
//!
//! A store can start empty, with the built-in demo flights, with flights
//! read from a JSON seed file, or with both (demo flights first). The seed
//! file is read once at startup and never written back.

use std::fs;
use std::path::Path;

use chrono::{FixedOffset, TimeZone};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::flight::{FlightRecord, ZonedTime};
use crate::store::FlightStore;

fn at(day: u32, hour: u32, minute: u32, offset_hours: i32, zone: &str) -> Option<ZonedTime> {
    let offset = FixedOffset::east_opt(offset_hours * 3600)?;
    let at = offset
        .with_ymd_and_hms(2024, 9, day, hour, minute, 0)
        .single()?;
    Some(ZonedTime::new(at, zone))
}

/// The built-in demo schedule: four Canadian domestic flights on Sep 18 2024.
#[must_use]
pub fn demo_schedule() -> Vec<FlightRecord> {
    let flights = [
        ("AC 101", "YVR", "YYZ", at(18, 15, 0, -8, "PST"), at(18, 22, 30, -5, "EST")),
        ("AC 102", "YYC", "YUL", at(18, 14, 0, -7, "MST"), at(18, 19, 30, -5, "EST")),
        ("WS 203", "YEG", "YVR", at(18, 16, 30, -7, "MST"), at(18, 17, 30, -8, "PST")),
        ("WS 204", "YVR", "YYC", at(18, 18, 0, -8, "PST"), at(18, 21, 0, -7, "MST")),
    ];

    flights
        .into_iter()
        .filter_map(|(number, origin, destination, departure, arrival)| {
            Some(FlightRecord::new(
                number,
                origin,
                destination,
                departure?,
                arrival?,
            ))
        })
        .collect()
}

/// Read flights from a JSON seed file.
///
/// The file must contain a JSON array of flight records. Every record is
/// validated the same way an added flight is.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// a record with an empty required field.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<FlightRecord>> {
    let path = path.as_ref();
    debug!("Reading seed file {}", path.display());

    let contents = fs::read_to_string(path)?;
    let flights: Vec<FlightRecord> =
        serde_json::from_str(&contents).map_err(|source| Error::SeedLoad {
            path: path.to_path_buf(),
            source,
        })?;

    for flight in &flights {
        flight.validate()?;
    }

    info!(
        "Loaded {} flights from seed file {}",
        flights.len(),
        path.display()
    );
    Ok(flights)
}

/// Build the starting store described by `config`.
///
/// # Errors
///
/// Returns an error if the configured seed file cannot be loaded, or if
/// duplicate rejection is enabled and the seed repeats a flight number.
pub fn build_store(config: &Config) -> Result<FlightStore> {
    let mut store = FlightStore::new().reject_duplicates(config.schedule.reject_duplicates);

    if config.schedule.seed_demo_flights {
        for flight in demo_schedule() {
            store.seed(flight)?;
        }
    }

    if let Some(path) = &config.schedule.seed_file {
        for flight in load_seed_file(path)? {
            store.seed(flight)?;
        }
    }

    debug!("Schedule starts with {} flights", store.len());
    Ok(store)
}
