//! Transition actions accepted by the fine state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative decision when resolving a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeOutcome {
    /// Reject the dispute; the fine returns to `Pending`.
    Reinstate,
    /// Uphold the dispute; the fine is canceled.
    Cancel,
}

/// An action attempted against a fine's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "outcome", rename_all = "snake_case")]
pub enum FineAction {
    /// Settle the fine (driver of record or administrator).
    Pay,
    /// Contest the fine (driver of record only).
    Dispute,
    /// Administratively void the fine.
    Cancel,
    /// Close a dispute with an explicit outcome (administrator only).
    ResolveDispute(DisputeOutcome),
}

impl fmt::Display for FineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pay => write!(f, "pay"),
            Self::Dispute => write!(f, "dispute"),
            Self::Cancel => write!(f, "cancel"),
            Self::ResolveDispute(DisputeOutcome::Reinstate) => {
                write!(f, "resolve_dispute(reinstate)")
            }
            Self::ResolveDispute(DisputeOutcome::Cancel) => write!(f, "resolve_dispute(cancel)"),
        }
    }
}
