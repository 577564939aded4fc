//! Human-facing ticket number generation.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};

/// Generates collision-free ticket numbers of the form
/// `FX-YYYYMMDD-NNN`, where the sequence restarts each UTC day.
///
/// The generator serializes allocation behind a mutex so two concurrent
/// issuances can never receive the same number.
#[derive(Debug)]
pub struct TicketGenerator {
    prefix: String,
    state: Mutex<(NaiveDate, u64)>,
}

impl TicketGenerator {
    /// Create a generator with the given prefix (e.g. `"FX"`).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            state: Mutex::new((NaiveDate::MIN, 0)),
        }
    }

    /// Allocate the next ticket number for a fine issued at `issued_at`.
    pub fn next(&self, issued_at: DateTime<Utc>) -> String {
        let date = issued_at.date_naive();
        let mut state = self.state.lock().expect("ticket lock poisoned");

        if state.0 != date {
            *state = (date, 0);
        }
        state.1 += 1;

        format!(
            "{}-{}-{:03}",
            self.prefix,
            date.format("%Y%m%d"),
            state.1
        )
    }
}
