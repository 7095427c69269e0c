//! In-memory flight schedule.
//!
//! [`FlightStore`] owns an insertion-ordered list of [`FlightRecord`]s and
//! provides add, search, edit, and delete over it. All lookups are linear
//! scans by flight number; when duplicates exist the first match wins.
//!
//! The store never prints. Every operation returns a typed result and emits
//! `tracing` events; rendering outcomes for a user is the job of
//! [`crate::report::Reporter`].

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::flight::FlightRecord;
use crate::timefmt::parse_search_date;

/// Insertion-ordered collection of scheduled flights.
#[derive(Debug, Clone, Default)]
pub struct FlightStore {
    flights: Vec<FlightRecord>,
    reject_duplicates: bool,
}

impl FlightStore {
    /// Create an empty store that tolerates duplicate flight numbers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `flights`, in order.
    ///
    /// The records are taken as-is; use [`FlightStore::add`] to get validation.
    #[must_use]
    pub fn with_flights(flights: Vec<FlightRecord>) -> Self {
        Self {
            flights,
            reject_duplicates: false,
        }
    }

    /// Make [`FlightStore::add`] reject flight numbers that are already scheduled.
    #[must_use]
    pub fn reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }

    /// Number of scheduled flights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check if the schedule is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// All scheduled flights, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[FlightRecord] {
        &self.flights
    }

    /// Index of the first flight with the given number.
    #[must_use]
    pub fn position(&self, flight_number: &str) -> Option<usize> {
        self.flights
            .iter()
            .position(|flight| flight.flight_number == flight_number)
    }

    /// The first flight with the given number.
    #[must_use]
    pub fn get(&self, flight_number: &str) -> Option<&FlightRecord> {
        self.position(flight_number).map(|idx| &self.flights[idx])
    }

    fn check_new(&self, flight: &FlightRecord) -> Result<()> {
        flight.validate()?;

        if self.reject_duplicates && self.position(&flight.flight_number).is_some() {
            return Err(Error::DuplicateFlight {
                flight_number: flight.flight_number.clone(),
            });
        }
        Ok(())
    }

    /// Append a flight to the end of the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if the flight number, origin, or
    /// destination is empty, and [`Error::DuplicateFlight`] if duplicate
    /// rejection is enabled and the number is already scheduled. The store is
    /// unchanged on error.
    pub fn add(&mut self, flight: FlightRecord) -> Result<()> {
        self.check_new(&flight)?;

        info!(
            flight_number = %flight.flight_number,
            origin = %flight.origin,
            destination = %flight.destination,
            "Added flight"
        );
        self.flights.push(flight);
        Ok(())
    }

    /// Append a flight while building the starting schedule.
    ///
    /// Same checks as [`FlightStore::add`], but only logged at debug level.
    ///
    /// # Errors
    ///
    /// As for [`FlightStore::add`].
    pub fn seed(&mut self, flight: FlightRecord) -> Result<()> {
        self.check_new(&flight)?;

        debug!(flight_number = %flight.flight_number, "Seeded flight");
        self.flights.push(flight);
        Ok(())
    }

    /// Find flights departing on `date` that match the route filters.
    ///
    /// `date` must be in `Mon DD YYYY` form. An empty `origin` or
    /// `destination` matches any value. The departure date is compared in the
    /// departure's own zone, ignoring time of day.
    ///
    /// The returned iterator borrows the store and is lazy; call `search`
    /// again for a fresh pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateFormat`] if `date` cannot be parsed. No records
    /// are produced in that case.
    pub fn search<'a>(
        &'a self,
        date: &str,
        origin: &'a str,
        destination: &'a str,
    ) -> Result<impl Iterator<Item = &'a FlightRecord> + 'a> {
        let date = parse_search_date(date)?;
        debug!(%date, origin, destination, "Searching flights");

        Ok(self
            .flights
            .iter()
            .filter(move |flight| flight.matches(date, origin, destination)))
    }

    /// Replace the first flight numbered `flight_number` with `flight`,
    /// returning the record it replaced.
    ///
    /// The replacement is wholesale and keeps the original position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if `flight` is missing a required
    /// field, and [`Error::FlightNotFound`] if no flight has that number. The
    /// store is unchanged on error.
    pub fn edit(&mut self, flight_number: &str, flight: FlightRecord) -> Result<FlightRecord> {
        flight.validate()?;

        let idx = self
            .position(flight_number)
            .ok_or_else(|| Error::not_found(flight_number))?;

        info!(
            flight_number,
            new_flight_number = %flight.flight_number,
            position = idx,
            "Updated flight"
        );
        Ok(std::mem::replace(&mut self.flights[idx], flight))
    }

    /// Remove the first flight numbered `flight_number`, returning it.
    ///
    /// The relative order of the remaining flights is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no flight has that number; the
    /// store is unchanged.
    pub fn delete(&mut self, flight_number: &str) -> Result<FlightRecord> {
        let idx = self
            .position(flight_number)
            .ok_or_else(|| Error::not_found(flight_number))?;

        let removed = self.flights.remove(idx);
        info!(flight_number, position = idx, "Deleted flight");
        Ok(removed)
    }
}
