//! Runs the operations requested on the command line against a store.

use std::io::Write;

use tracing::debug;

use super::input::{parse_add, parse_edit};
use super::{given, Operations};
use crate::error::{Error, Result};
use crate::report::{Operation, Reporter};
use crate::store::FlightStore;

/// How a run of command-line operations ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// Every requested operation was attempted.
    Completed,
    /// A malformed `--add` or `--edit` value stopped the run early.
    Stopped,
}

fn rejected<W: Write>(
    reporter: &mut Reporter<W>,
    operation: Operation,
    err: &Error,
) -> Result<()> {
    debug!(?operation, kind = err.kind(), "{err}");
    reporter.failure(operation, err)
}

/// Run `ops` against `store` in order: add, search, edit, delete.
///
/// Rejected operations are reported through `reporter` and do not fail the
/// run. A wrong field count on `--add` or `--edit` is reported and ends the
/// run without attempting the remaining operations.
///
/// # Errors
///
/// Returns an error only if writing to the reporter's output fails.
pub fn run<W: Write>(
    ops: &Operations,
    store: &mut FlightStore,
    reporter: &mut Reporter<W>,
) -> Result<Outcome> {
    if let Some(value) = given(ops.add.as_deref()) {
        match parse_add(value) {
            Ok(flight) => match store.add(flight.clone()) {
                Ok(()) => reporter.added(&flight)?,
                Err(e) => rejected(reporter, Operation::Add, &e)?,
            },
            Err(e @ Error::MalformedInput { .. }) => {
                rejected(reporter, Operation::Add, &e)?;
                return Ok(Outcome::Stopped);
            }
            Err(e) => rejected(reporter, Operation::Add, &e)?,
        }
    }

    if let Some(date) = given(ops.search_date.as_deref()) {
        match store.search(date, &ops.origin, &ops.destination) {
            Ok(matches) => {
                reporter.search_header(date, &ops.origin, &ops.destination)?;
                for flight in matches {
                    reporter.search_match(flight)?;
                }
            }
            Err(e) => rejected(reporter, Operation::Search, &e)?,
        }
    }

    if let Some(value) = given(ops.edit.as_deref()) {
        match parse_edit(value) {
            Ok(request) => {
                let replacement = request.flight.clone();
                match store.edit(&request.flight_number, request.flight) {
                    Ok(_) => reporter.updated(&request.flight_number, &replacement)?,
                    Err(e) => rejected(reporter, Operation::Edit, &e)?,
                }
            }
            Err(e @ Error::MalformedInput { .. }) => {
                rejected(reporter, Operation::Edit, &e)?;
                return Ok(Outcome::Stopped);
            }
            Err(e) => rejected(reporter, Operation::Edit, &e)?,
        }
    }

    if let Some(flight_number) = given(ops.delete.as_deref()) {
        match store.delete(flight_number) {
            Ok(removed) => reporter.deleted(&removed)?,
            Err(e) => rejected(reporter, Operation::Delete, &e)?,
        }
    }

    debug!(flights = store.len(), "Finished running operations");
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{OutputFormat, ADD_USAGE, DATE_HINT, EDIT_USAGE};
    use crate::logging::capture_logs;
    use crate::seed::demo_schedule;
    use tracing::Level;

    const DEPARTURE: &str = "Sep 20 2024 15:00 PST";
    const ARRIVAL: &str = "Sep 20 2024 22:30 EST";

    fn demo_store() -> FlightStore {
        FlightStore::with_flights(demo_schedule())
    }

    fn run_plain(ops: &Operations, store: &mut FlightStore) -> (Outcome, String) {
        let mut reporter = Reporter::new(Vec::new(), OutputFormat::Plain);
        let outcome = run(ops, store, &mut reporter).unwrap();
        (outcome, String::from_utf8(reporter.into_inner()).unwrap())
    }

    #[test]
    fn test_no_operations() {
        let mut store = demo_store();
        let (outcome, out) = run_plain(&Operations::default(), &mut store);
        assert_eq!(outcome, Outcome::Completed);
        assert!(out.is_empty());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_add_then_search() {
        let mut store = demo_store();
        let ops = Operations {
            add: Some(format!("AC 301,YVR,YYZ,{DEPARTURE},{ARRIVAL}")),
            search_date: Some("Sep 20 2024".to_string()),
            ..Operations::default()
        };
        let (outcome, out) = run_plain(&ops, &mut store);

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(store.len(), 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Flight added successfully.");
        assert_eq!(lines[1], "You have asked to search for flights on Sep 20 2024 from  to ");
        assert_eq!(
            lines[2],
            "Flight Number: AC 301, Origin: YVR, Destination: YYZ, \
             Departure: Sep 20, 2024 at 15:00 PST, Arrival: Sep 20, 2024 at 22:30 EST"
        );
    }

    #[test]
    fn test_search_demo_schedule_with_filters() {
        let mut store = demo_store();
        let ops = Operations {
            search_date: Some("Sep 18 2024".to_string()),
            origin: "YVR".to_string(),
            ..Operations::default()
        };
        let (_, out) = run_plain(&ops, &mut store);
        let matches: Vec<&str> = out
            .lines()
            .filter(|line| line.starts_with("Flight Number"))
            .collect();
        assert_eq!(matches.len(), 2);
        assert!(matches[0].contains("AC 101"));
        assert!(matches[1].contains("WS 204"));
    }

    #[test]
    fn test_search_bad_date_prints_hint_only() {
        let mut store = demo_store();
        let ops = Operations {
            search_date: Some("18/09/2024".to_string()),
            ..Operations::default()
        };
        let (outcome, out) = run_plain(&ops, &mut store);
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(out.trim_end(), DATE_HINT);
    }

    #[test]
    fn test_malformed_add_stops_later_operations() {
        let mut store = demo_store();
        let ops = Operations {
            add: Some("AC 301,YVR".to_string()),
            delete: Some("AC 101".to_string()),
            ..Operations::default()
        };
        let (outcome, out) = run_plain(&ops, &mut store);

        assert_eq!(outcome, Outcome::Stopped);
        assert_eq!(out.trim_end(), ADD_USAGE);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_malformed_edit_stops_delete() {
        let mut store = demo_store();
        let ops = Operations {
            edit: Some("AC 101,AC 999".to_string()),
            delete: Some("AC 102".to_string()),
            ..Operations::default()
        };
        let (outcome, out) = run_plain(&ops, &mut store);

        assert_eq!(outcome, Outcome::Stopped);
        assert_eq!(out.trim_end(), EDIT_USAGE);
        assert!(store.get("AC 102").is_some());
    }

    #[test]
    fn test_invalid_add_continues() {
        let mut store = demo_store();
        let ops = Operations {
            add: Some(format!("AC999,,YYZ,{DEPARTURE},{ARRIVAL}")),
            delete: Some("AC 101".to_string()),
            ..Operations::default()
        };
        let (outcome, out) = run_plain(&ops, &mut store);

        assert_eq!(outcome, Outcome::Completed);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Invalid flight data - origin must not be empty.");
        assert_eq!(lines[1], "Flight deleted successfully.");
        assert_eq!(store.len(), 3);
        assert!(store.get("AC999").is_none());
    }

    #[test]
    fn test_bad_timestamp_is_reported_not_defaulted() {
        let mut store = demo_store();
        let ops = Operations {
            add: Some(format!("AC 301,YVR,YYZ,Sep 20 2024 15:00 XYZ,{ARRIVAL}")),
            ..Operations::default()
        };
        let (outcome, out) = run_plain(&ops, &mut store);

        assert_eq!(outcome, Outcome::Completed);
        assert!(out.starts_with("Could not read timestamp"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_bad_edit_timestamp_is_skipped() {
        let mut store = demo_store();
        let ops = Operations {
            edit: Some(format!("AC 102,AC 402,YYC,YUL,Sep 20 2024 25:00 MST,{ARRIVAL}")),
            delete: Some("WS 203".to_string()),
            ..Operations::default()
        };
        let (outcome, out) = run_plain(&ops, &mut store);

        assert_eq!(outcome, Outcome::Completed);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Could not read timestamp"));
        assert_eq!(lines[1], "Flight deleted successfully.");

        let mut expected = demo_schedule();
        expected.remove(2);
        assert_eq!(store.records(), expected.as_slice());
    }

    #[test]
    fn test_rejections_are_not_logged_at_info() {
        let mut store = demo_store();
        let ops = Operations {
            delete: Some("AC 999".to_string()),
            ..Operations::default()
        };
        let ((_, out), logs) = capture_logs(Level::INFO, || run_plain(&ops, &mut store));

        assert_eq!(
            out.trim_end(),
            "That flight number does not correspond to any currently scheduled flights."
        );
        assert!(logs.is_empty(), "unexpected logs: {logs}");
    }

    #[test]
    fn test_edit_and_delete() {
        let mut store = demo_store();
        let ops = Operations {
            edit: Some(format!("AC 102,AC 402,YYC,YUL,{DEPARTURE},{ARRIVAL}")),
            delete: Some("WS 203".to_string()),
            ..Operations::default()
        };
        let (_, out) = run_plain(&ops, &mut store);

        assert_eq!(
            out,
            "Flight updated successfully.\nFlight deleted successfully.\n"
        );
        assert_eq!(store.position("AC 402"), Some(1));
        assert!(store.get("WS 203").is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_not_found_messages() {
        let mut store = demo_store();
        let ops = Operations {
            edit: Some(format!("AC 999,AC 998,YYC,YUL,{DEPARTURE},{ARRIVAL}")),
            delete: Some("AC 999".to_string()),
            ..Operations::default()
        };
        let (outcome, out) = run_plain(&ops, &mut store);

        assert_eq!(outcome, Outcome::Completed);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Flight not found.");
        assert_eq!(
            lines[1],
            "That flight number does not correspond to any currently scheduled flights."
        );
        assert_eq!(store.records(), demo_schedule().as_slice());
    }

    #[test]
    fn test_json_output() {
        let mut store = demo_store();
        let ops = Operations {
            search_date: Some("Sep 18 2024".to_string()),
            destination: "YYZ".to_string(),
            ..Operations::default()
        };
        let mut reporter = Reporter::new(Vec::new(), OutputFormat::Json);
        let _ = run(&ops, &mut store, &mut reporter).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();

        let events: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "search");
        assert_eq!(events[0]["destination"], "YYZ");
        assert_eq!(events[1]["flight"]["flight_number"], "AC 101");
        assert_eq!(events[1]["flight"]["departure"]["zone"], "PST");
    }
}
