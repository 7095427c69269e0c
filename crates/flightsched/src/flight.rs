//! Core flight types for flightsched.
//!
//! This module defines the data structures for a single scheduled flight and
//! the zoned timestamps attached to it.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::timefmt::DISPLAY_FORMAT;

/// A point in time together with the zone label it was entered in.
///
/// The label is kept alongside the offset so a timestamp is always rendered
/// in the zone it was scheduled in (`15:00 PST`), never normalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonedTime {
    /// The instant, carrying its UTC offset.
    pub at: DateTime<FixedOffset>,
    /// Zone label, e.g. `PST` or `+05:30`.
    pub zone: String,
}

impl ZonedTime {
    /// Create a zoned time from an instant and a zone label.
    #[must_use]
    pub fn new(at: DateTime<FixedOffset>, zone: impl Into<String>) -> Self {
        Self {
            at,
            zone: zone.into(),
        }
    }

    /// The calendar date in this timestamp's own zone.
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.at.date_naive()
    }
}

impl fmt::Display for ZonedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.at.format(DISPLAY_FORMAT), self.zone)
    }
}

/// One scheduled flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Flight number, the lookup key for edits and deletes.
    pub flight_number: String,
    /// Origin location code.
    pub origin: String,
    /// Destination location code.
    pub destination: String,
    /// Scheduled departure.
    pub departure: ZonedTime,
    /// Scheduled arrival.
    pub arrival: ZonedTime,
}

impl FlightRecord {
    /// Create a new flight record.
    #[must_use]
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: ZonedTime,
        arrival: ZonedTime,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            departure,
            arrival,
        }
    }

    /// Check that the required string fields are present.
    ///
    /// Timestamps are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("flight_number", &self.flight_number),
            ("origin", &self.origin),
            ("destination", &self.destination),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(Error::InvalidRecord { field: *field }),
            None => Ok(()),
        }
    }

    /// The departure date in the departure's own zone.
    #[must_use]
    pub fn departure_date(&self) -> NaiveDate {
        self.departure.local_date()
    }

    /// Check if this flight departs on `date` and matches the route filters.
    ///
    /// An empty filter matches any value.
    #[must_use]
    pub fn matches(&self, date: NaiveDate, origin: &str, destination: &str) -> bool {
        (origin.is_empty() || self.origin == origin)
            && (destination.is_empty() || self.destination == destination)
            && self.departure_date() == date
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight Number: {}, Origin: {}, Destination: {}, Departure: {}, Arrival: {}",
            self.flight_number, self.origin, self.destination, self.departure, self.arrival
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Build a zoned time for tests from wall-clock parts and a zone offset in hours.
    pub(crate) fn zoned(
        y: i32,
        m: u32,
        d: u32,
        hh: u32,
        mm: u32,
        offset_hours: i32,
        zone: &str,
    ) -> ZonedTime {
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let at = offset.with_ymd_and_hms(y, m, d, hh, mm, 0).unwrap();
        ZonedTime::new(at, zone)
    }

    pub(crate) fn ac101() -> FlightRecord {
        FlightRecord::new(
            "AC101",
            "YVR",
            "YYZ",
            zoned(2024, 9, 18, 15, 0, -8, "PST"),
            zoned(2024, 9, 18, 22, 30, -5, "EST"),
        )
    }

    #[test]
    fn test_zoned_time_display_uses_own_zone() {
        let ts = zoned(2024, 9, 18, 15, 0, -8, "PST");
        assert_eq!(ts.to_string(), "Sep 18, 2024 at 15:00 PST");
    }

    #[test]
    fn test_local_date_ignores_utc_rollover() {
        // 20:00 PST is already the 19th in UTC
        let ts = zoned(2024, 9, 18, 20, 0, -8, "PST");
        assert_eq!(ts.local_date(), NaiveDate::from_ymd_opt(2024, 9, 18).unwrap());
    }

    #[test]
    fn test_validate_ok() {
        assert!(ac101().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_empty_field() {
        let mut flight = ac101();
        flight.origin = String::new();
        assert!(matches!(
            flight.validate(),
            Err(Error::InvalidRecord { field: "origin" })
        ));

        let mut flight = ac101();
        flight.flight_number = "  ".to_string();
        assert!(matches!(
            flight.validate(),
            Err(Error::InvalidRecord {
                field: "flight_number"
            })
        ));
    }

    #[test]
    fn test_matches_filters() {
        let flight = ac101();
        let date = NaiveDate::from_ymd_opt(2024, 9, 18).unwrap();
        assert!(flight.matches(date, "", ""));
        assert!(flight.matches(date, "YVR", "YYZ"));
        assert!(flight.matches(date, "YVR", ""));
        assert!(!flight.matches(date, "YYC", ""));
        assert!(!flight.matches(date, "", "YUL"));
        assert!(!flight.matches(date.succ_opt().unwrap(), "", ""));
    }

    #[test]
    fn test_display_line() {
        assert_eq!(
            ac101().to_string(),
            "Flight Number: AC101, Origin: YVR, Destination: YYZ, \
             Departure: Sep 18, 2024 at 15:00 PST, Arrival: Sep 18, 2024 at 22:30 EST"
        );
    }

    #[test]
    fn test_serialization_keeps_zone() {
        let flight = ac101();
        let json = serde_json::to_string(&flight).unwrap();
        assert!(json.contains("\"zone\":\"PST\""));
        let back: FlightRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flight);
    }
}
