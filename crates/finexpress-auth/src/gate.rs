//! Mutation gates consulted before every state-machine transition.
//!
//! Authorization is checked before transition validity, so an
//! unauthorized caller receives `Forbidden` and never learns whether
//! the transition itself would have been accepted.

use finexpress_core::{AppError, AppResult};
use finexpress_entity::actor::{Actor, ActorRole};
use finexpress_entity::fine::{Fine, FineAction};

/// Require the officer capability (fine issuance).
pub fn require_officer(actor: &Actor) -> AppResult<()> {
    if actor.role.is_officer() {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Role '{}' cannot issue fines",
            actor.role
        )))
    }
}

/// Require the administrator capability (catalog maintenance,
/// cancellation, dispute resolution).
pub fn require_admin(actor: &Actor) -> AppResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Role '{}' cannot perform administrative operations",
            actor.role
        )))
    }
}

/// Authorize a state-machine action against a specific fine.
///
/// - `Pay`: the driver of record, or an administrator.
/// - `Dispute`: the driver of record only.
/// - `Cancel` / `ResolveDispute`: administrators only.
pub fn authorize_action(actor: &Actor, fine: &Fine, action: FineAction) -> AppResult<()> {
    match action {
        FineAction::Pay => {
            let is_driver_of_record =
                actor.role == ActorRole::Driver && fine.is_claimed_by(&actor.email);
            if is_driver_of_record || actor.is_admin() {
                Ok(())
            } else {
                Err(AppError::forbidden(format!(
                    "Only the associated driver or an administrator may pay fine {}",
                    fine.ticket_number
                )))
            }
        }
        FineAction::Dispute => {
            if actor.role == ActorRole::Driver && fine.is_claimed_by(&actor.email) {
                Ok(())
            } else {
                Err(AppError::forbidden(format!(
                    "Only the associated driver may dispute fine {}",
                    fine.ticket_number
                )))
            }
        }
        FineAction::Cancel | FineAction::ResolveDispute(_) => require_admin(actor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use finexpress_core::error::ErrorKind;
    use finexpress_core::types::{ActorId, FineId, OffenseId};
    use finexpress_entity::fine::{DisputeOutcome, FineStatus, OffenseSnapshot};
    use finexpress_entity::offense::OffenseCategory;

    fn claimed_fine(driver_email: &str) -> Fine {
        let issued = Utc.with_ymd_and_hms(2025, 4, 19, 10, 30, 0).unwrap();
        Fine {
            id: FineId::new(),
            ticket_number: "FX-20250419-001".into(),
            license_plate: "ABC123".into(),
            offense_id: OffenseId::new(),
            offense: OffenseSnapshot {
                code: "SPD-01".into(),
                description: "Speeding (10-20 km/h over limit)".into(),
                category: OffenseCategory::Minor,
            },
            amount: 5000,
            status: FineStatus::Pending,
            issue_date: issued,
            due_date: issued + Duration::days(14),
            payment_date: None,
            location: "Main St & 5th Ave".into(),
            issued_by: ActorId::new(),
            notes: None,
            driver_email: Some(driver_email.to_string()),
            photo_reference: None,
        }
    }

    fn driver(email: &str) -> Actor {
        Actor::new(ActorId::new(), "Dave", email, ActorRole::Driver)
    }

    fn admin() -> Actor {
        Actor::new(ActorId::new(), "Ann", "ann@example.com", ActorRole::Administrator)
    }

    fn officer() -> Actor {
        Actor::new(ActorId::new(), "John", "john@pd.example", ActorRole::Officer)
    }

    #[test]
    fn test_only_officers_issue() {
        assert!(require_officer(&officer()).is_ok());
        let err = require_officer(&admin()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert!(require_officer(&driver("d@example.com")).is_err());
    }

    #[test]
    fn test_pay_allows_driver_of_record_and_admin() {
        let fine = claimed_fine("dave@example.com");

        assert!(authorize_action(&driver("dave@example.com"), &fine, FineAction::Pay).is_ok());
        assert!(authorize_action(&admin(), &fine, FineAction::Pay).is_ok());

        let err =
            authorize_action(&driver("other@example.com"), &fine, FineAction::Pay).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert!(authorize_action(&officer(), &fine, FineAction::Pay).is_err());
    }

    #[test]
    fn test_dispute_is_driver_of_record_only() {
        let fine = claimed_fine("dave@example.com");

        assert!(authorize_action(&driver("dave@example.com"), &fine, FineAction::Dispute).is_ok());
        // Even an administrator cannot dispute on a driver's behalf.
        let err = authorize_action(&admin(), &fine, FineAction::Dispute).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_cancel_and_resolve_are_admin_only() {
        let fine = claimed_fine("dave@example.com");

        assert!(authorize_action(&admin(), &fine, FineAction::Cancel).is_ok());
        assert!(
            authorize_action(
                &admin(),
                &fine,
                FineAction::ResolveDispute(DisputeOutcome::Reinstate)
            )
            .is_ok()
        );

        let err =
            authorize_action(&driver("dave@example.com"), &fine, FineAction::Cancel).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert!(
            authorize_action(
                &officer(),
                &fine,
                FineAction::ResolveDispute(DisputeOutcome::Cancel)
            )
            .is_err()
        );
    }
}
