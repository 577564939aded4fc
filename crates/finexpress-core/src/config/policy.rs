//! Fine issuance policy configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Policy constants governing fine issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Days between issuance and the payment due date. Must be at least
    /// 1, so a fine's due date always falls after its issue date.
    #[serde(default = "default_grace_period_days")]
    pub grace_period_days: u32,
    /// Prefix used when generating human-facing ticket numbers.
    #[serde(default = "default_ticket_prefix")]
    pub ticket_prefix: String,
}

impl PolicyConfig {
    /// The grace period as a `chrono::Duration`.
    pub fn grace_period(&self) -> Duration {
        Duration::days(i64::from(self.grace_period_days))
    }

    /// Reject values that would break issuance, at load time rather
    /// than on the first fine.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.grace_period_days == 0 {
            return Err(AppError::configuration(
                "policy.grace_period_days must be at least 1",
            ));
        }
        if self.ticket_prefix.trim().is_empty() {
            return Err(AppError::configuration(
                "policy.ticket_prefix must not be empty",
            ));
        }
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            grace_period_days: default_grace_period_days(),
            ticket_prefix: default_ticket_prefix(),
        }
    }
}

fn default_grace_period_days() -> u32 {
    14
}

fn default_ticket_prefix() -> String {
    "FX".to_string()
}
