//! Offense-catalog domain events.

use serde::{Deserialize, Serialize};

use crate::types::OffenseId;

/// Events related to offense catalog maintenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OffenseEvent {
    /// A new offense type was added to the catalog.
    Created {
        /// The offense ID.
        offense_id: OffenseId,
        /// The offense code.
        code: String,
    },
    /// An existing offense type was edited.
    Updated {
        /// The offense ID.
        offense_id: OffenseId,
        /// Fields that changed.
        changed_fields: Vec<String>,
    },
    /// An offense type was removed from the catalog.
    ///
    /// Fines issued against it keep their snapshot and are unaffected.
    Deleted {
        /// The offense ID.
        offense_id: OffenseId,
        /// The offense code (for display after deletion).
        code: String,
    },
}
