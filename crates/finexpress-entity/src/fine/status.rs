//! Fine status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a fine record.
///
/// `Overdue` is a read-time projection: stored records hold `Pending`
/// until a checked transition moves them, and query paths report
/// `Overdue` whenever a pending fine's due date has elapsed. The variant
/// still exists in storage terms so that implementations sweeping the
/// projection into place remain representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    /// Issued and awaiting payment.
    Pending,
    /// Settled. Terminal.
    Paid,
    /// Pending with an elapsed due date (read-time projection).
    Overdue,
    /// Contested by the associated driver; frozen until resolution.
    Disputed,
    /// Administratively voided. Terminal.
    Canceled,
}

impl FineStatus {
    /// Check if the status is terminal (no further transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Canceled)
    }

    /// Check if a payment is accepted from this status.
    pub fn can_pay(&self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }

    /// Check if a dispute is accepted from this status.
    pub fn can_dispute(&self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }

    /// Check if an administrative cancellation is accepted from this status.
    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Pending | Self::Overdue | Self::Disputed)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Disputed => "disputed",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for FineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FineStatus {
    type Err = finexpress_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            "disputed" => Ok(Self::Disputed),
            "canceled" => Ok(Self::Canceled),
            _ => Err(finexpress_core::AppError::invalid_input(format!(
                "Invalid fine status: '{s}'"
            ))),
        }
    }
}
