//! Parsing of comma-separated flag values.
//!
//! `--add` and `--edit` take a whole flight as one comma-separated string.
//! Fields are trimmed after splitting, and both flags share one timestamp
//! parser (see [`crate::timefmt::parse_timestamp`]).

use crate::error::{Error, Result};
use crate::flight::FlightRecord;
use crate::timefmt::parse_timestamp;

/// Number of fields in an `--add` value.
pub const ADD_FIELDS: usize = 5;

/// Number of fields in an `--edit` value.
pub const EDIT_FIELDS: usize = 6;

/// A decoded `--edit` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    /// Flight number of the record to replace.
    pub flight_number: String,
    /// The replacement record.
    pub flight: FlightRecord,
}

fn split_fields<'a>(
    flag: &'static str,
    value: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = value.split(',').map(str::trim).collect();
    if fields.len() == expected {
        Ok(fields)
    } else {
        Err(Error::MalformedInput {
            flag,
            expected,
            found: fields.len(),
        })
    }
}

fn record_from(fields: &[&str]) -> Result<FlightRecord> {
    let [number, origin, destination, departure, arrival] = fields else {
        return Err(Error::MalformedInput {
            flag: "add",
            expected: ADD_FIELDS,
            found: fields.len(),
        });
    };
    Ok(FlightRecord::new(
        *number,
        *origin,
        *destination,
        parse_timestamp(departure)?,
        parse_timestamp(arrival)?,
    ))
}

/// Decode an `--add` value: `FlightNumber,Origin,Destination,Departure,Arrival`.
///
/// Empty string fields are passed through; the store rejects them.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] for the wrong number of fields and
/// [`Error::TimestampParse`] for an unreadable departure or arrival.
pub fn parse_add(value: &str) -> Result<FlightRecord> {
    let fields = split_fields("add", value, ADD_FIELDS)?;
    record_from(&fields)
}

/// Decode an `--edit` value:
/// `FlightNumber,NewFlightNumber,NewOrigin,NewDestination,NewDeparture,NewArrival`.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] for the wrong number of fields and
/// [`Error::TimestampParse`] for an unreadable departure or arrival.
pub fn parse_edit(value: &str) -> Result<EditRequest> {
    let fields = split_fields("edit", value, EDIT_FIELDS)?;
    Ok(EditRequest {
        flight_number: fields[0].to_string(),
        flight: record_from(&fields[1..])?,
    })
}
