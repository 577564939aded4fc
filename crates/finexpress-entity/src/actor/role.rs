//! Actor role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the fine lifecycle system.
///
/// The set is closed so that every access-scope and mutation-gate check
/// is exhaustively matched at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    /// Issues fines in the field; sees only fines they personally issued.
    Officer,
    /// Unrestricted visibility; maintains the offense catalog and
    /// performs cancellations and dispute resolutions.
    Administrator,
    /// Sees and settles only fines claimed by their email address.
    Driver,
}

impl ActorRole {
    /// Check if this role is an administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// Check if this role can issue fines.
    pub fn is_officer(&self) -> bool {
        matches!(self, Self::Officer)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Officer => "officer",
            Self::Administrator => "administrator",
            Self::Driver => "driver",
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActorRole {
    type Err = finexpress_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "officer" => Ok(Self::Officer),
            "administrator" | "admin" => Ok(Self::Administrator),
            "driver" => Ok(Self::Driver),
            _ => Err(finexpress_core::AppError::invalid_input(format!(
                "Invalid actor role: '{s}'. Expected one of: officer, administrator, driver"
            ))),
        }
    }
}
