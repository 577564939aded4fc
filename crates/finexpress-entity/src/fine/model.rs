//! Fine entity model and the status transition function.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finexpress_core::types::{ActorId, FineId, OffenseId};
use finexpress_core::{AppError, AppResult};

use super::action::{DisputeOutcome, FineAction};
use super::status::FineStatus;
use crate::offense::{Offense, OffenseCategory};

/// Immutable copy of the offense definition taken at issuance time.
///
/// Together with [`Fine::amount`] this makes issued fines independent of
/// later catalog edits or deletions: labels and amounts always resolve
/// from the fine itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffenseSnapshot {
    /// Offense code at issuance.
    pub code: String,
    /// Offense description at issuance.
    pub description: String,
    /// Offense category at issuance.
    pub category: OffenseCategory,
}

impl From<&Offense> for OffenseSnapshot {
    fn from(offense: &Offense) -> Self {
        Self {
            code: offense.code.clone(),
            description: offense.description.clone(),
            category: offense.category,
        }
    }
}

/// A single issued traffic-violation record.
///
/// Fines are created exclusively by officers, mutated only through the
/// checked transitions in [`Fine::apply_action`], and never physically
/// deleted: administrative cancellation is a status, which keeps
/// historical reports accurate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fine {
    /// Unique system-assigned identifier.
    pub id: FineId,
    /// Unique human-facing ticket number derived from the issue date.
    pub ticket_number: String,
    /// License plate of the offending vehicle, stored uppercase.
    pub license_plate: String,
    /// Reference to the offense catalog entry. Immutable.
    pub offense_id: OffenseId,
    /// Denormalized offense definition captured at issuance. Immutable.
    pub offense: OffenseSnapshot,
    /// Fine amount in minor currency units, copied from the offense at
    /// issuance. Later catalog edits never change it.
    pub amount: i64,
    /// Stored status. Query paths report the projection from
    /// [`Fine::effective_status`] instead of reading this directly.
    pub status: FineStatus,
    /// When the fine was issued. Immutable.
    pub issue_date: DateTime<Utc>,
    /// Payment deadline, `issue_date` plus the policy grace period. Immutable.
    pub due_date: DateTime<Utc>,
    /// Set exactly when the fine first reaches `Paid`.
    pub payment_date: Option<DateTime<Utc>>,
    /// Where the violation occurred.
    pub location: String,
    /// The officer who issued the fine. Immutable.
    pub issued_by: ActorId,
    /// Optional free-text notes from the issuing officer.
    pub notes: Option<String>,
    /// Email associating the fine with a driver actor, stored lowercase.
    /// Absent means the fine is not yet claimable by any driver.
    pub driver_email: Option<String>,
    /// Opaque handle to externally stored photo evidence.
    pub photo_reference: Option<String>,
}

impl Fine {
    /// The status as seen by every query path at instant `now`.
    ///
    /// A stored `Pending` fine whose due date has elapsed is reported as
    /// `Overdue` without mutating stored state. All other statuses
    /// project to themselves.
    pub fn effective_status(&self, now: DateTime<Utc>) -> FineStatus {
        if self.status == FineStatus::Pending && self.due_date < now {
            FineStatus::Overdue
        } else {
            self.status
        }
    }

    /// Whether the given driver email is the driver of record.
    pub fn is_claimed_by(&self, email: &str) -> bool {
        self.driver_email
            .as_deref()
            .is_some_and(|claimed| claimed.eq_ignore_ascii_case(email))
    }

    /// Case-insensitive free-text match over ticket number, license
    /// plate, offense description, and location.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.ticket_number.to_lowercase().contains(&q)
            || self.license_plate.to_lowercase().contains(&q)
            || self.offense.description.to_lowercase().contains(&q)
            || self.location.to_lowercase().contains(&q)
    }

    /// Apply a state-machine action, validating against the current
    /// status at instant `now`.
    ///
    /// On success the record is mutated and the previous *effective*
    /// status is returned for event emission. On failure the record is
    /// left byte-for-byte unchanged and the caller receives
    /// `InvalidTransition`.
    pub fn apply_action(&mut self, action: FineAction, now: DateTime<Utc>) -> AppResult<FineStatus> {
        let current = self.effective_status(now);

        match action {
            FineAction::Pay => {
                if !current.can_pay() {
                    return Err(AppError::invalid_transition(format!(
                        "Cannot pay fine {} in status '{current}'",
                        self.ticket_number
                    )));
                }
                self.status = FineStatus::Paid;
                self.payment_date = Some(now);
            }
            FineAction::Dispute => {
                if !current.can_dispute() {
                    return Err(AppError::invalid_transition(format!(
                        "Cannot dispute fine {} in status '{current}'",
                        self.ticket_number
                    )));
                }
                self.status = FineStatus::Disputed;
            }
            FineAction::Cancel => {
                if !current.can_cancel() {
                    return Err(AppError::invalid_transition(format!(
                        "Cannot cancel fine {} in status '{current}'",
                        self.ticket_number
                    )));
                }
                self.status = FineStatus::Canceled;
            }
            FineAction::ResolveDispute(outcome) => {
                if current != FineStatus::Disputed {
                    return Err(AppError::invalid_transition(format!(
                        "Cannot resolve dispute on fine {} in status '{current}'",
                        self.ticket_number
                    )));
                }
                self.status = match outcome {
                    DisputeOutcome::Reinstate => FineStatus::Pending,
                    DisputeOutcome::Cancel => FineStatus::Canceled,
                };
            }
        }

        Ok(current)
    }
}
