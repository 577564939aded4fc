//! Fine-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::FineId;

/// Events related to fine lifecycle operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FineEvent {
    /// A new fine was issued by an officer.
    Issued {
        /// The fine ID.
        fine_id: FineId,
        /// The human-facing ticket number.
        ticket_number: String,
        /// The fine amount in minor currency units.
        amount: i64,
    },
    /// A fine moved to a new status through a checked transition.
    StatusChanged {
        /// The fine ID.
        fine_id: FineId,
        /// The status before the transition (lowercase name).
        from: String,
        /// The status after the transition (lowercase name).
        to: String,
    },
}
