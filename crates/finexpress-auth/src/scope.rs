//! Role-scoped visibility predicates over fine records.

use serde::{Deserialize, Serialize};

use finexpress_core::types::ActorId;
use finexpress_entity::actor::{Actor, ActorRole};
use finexpress_entity::fine::Fine;

/// The visibility predicate computed for an actor.
///
/// Resolution is a pure function of the actor's role and identity:
///
/// - drivers see fines claimed by their email, and nothing else — a
///   fine for their own plate is invisible until the email association
///   is made;
/// - officers see only fines they personally issued;
/// - administrators are unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum FineScope {
    /// No restriction (administrators).
    Unrestricted,
    /// Fines issued by the given officer.
    IssuedBy {
        /// The issuing officer's id.
        officer_id: ActorId,
    },
    /// Fines whose driver association matches the given email.
    DriverEmail {
        /// The driver's email, lowercase.
        email: String,
    },
}

impl FineScope {
    /// Resolve the scope for an actor.
    pub fn for_actor(actor: &Actor) -> Self {
        match actor.role {
            ActorRole::Administrator => Self::Unrestricted,
            ActorRole::Officer => Self::IssuedBy {
                officer_id: actor.id,
            },
            ActorRole::Driver => Self::DriverEmail {
                email: actor.email.to_lowercase(),
            },
        }
    }

    /// Whether the given fine is visible under this scope.
    pub fn permits(&self, fine: &Fine) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::IssuedBy { officer_id } => fine.issued_by == *officer_id,
            Self::DriverEmail { email } => fine.is_claimed_by(email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use finexpress_core::types::{FineId, OffenseId};
    use finexpress_entity::fine::{FineStatus, OffenseSnapshot};
    use finexpress_entity::offense::OffenseCategory;

    fn fine_for(issued_by: ActorId, driver_email: Option<&str>) -> Fine {
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
            issued_by,
            notes: None,
            driver_email: driver_email.map(str::to_string),
            photo_reference: None,
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = Actor::new(ActorId::new(), "Ann", "ann@example.com", ActorRole::Administrator);
        let scope = FineScope::for_actor(&admin);
        assert!(scope.permits(&fine_for(ActorId::new(), None)));
    }

    #[test]
    fn test_officer_sees_only_own_issuances() {
        let officer = Actor::new(ActorId::new(), "John", "john@pd.example", ActorRole::Officer);
        let scope = FineScope::for_actor(&officer);

        assert!(scope.permits(&fine_for(officer.id, None)));
        assert!(!scope.permits(&fine_for(ActorId::new(), None)));
    }

    #[test]
    fn test_driver_matches_by_email_only() {
        let driver = Actor::new(
            ActorId::new(),
            "Dave",
            "Dave.Driver@Example.com",
            ActorRole::Driver,
        );
        let scope = FineScope::for_actor(&driver);

        assert!(scope.permits(&fine_for(ActorId::new(), Some("dave.driver@example.com"))));
        // Unclaimed fines stay invisible even when the plate is the driver's.
        assert!(!scope.permits(&fine_for(ActorId::new(), None)));
        assert!(!scope.permits(&fine_for(ActorId::new(), Some("other@example.com"))));
    }
}
