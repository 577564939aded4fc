//! Fine record store.

use dashmap::DashMap;
use tracing::debug;

use finexpress_core::types::FineId;
use finexpress_core::{AppError, AppResult};
use finexpress_entity::fine::Fine;

/// In-memory fine store.
///
/// Records live in a sharded concurrent map. [`FineStore::update_with`]
/// holds the record's exclusive lock for the duration of a transition,
/// so two concurrent attempts on the same fine serialize: exactly one
/// succeeds and the other validates against the post-transition status.
/// Operations on distinct fine ids do not contend.
///
/// Fines are never removed. Cancellation is a status transition, which
/// keeps historical time-window reports accurate.
#[derive(Debug, Default)]
pub struct FineStore {
    fines: DashMap<FineId, Fine>,
}

impl FineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a newly issued fine. Fails with `Conflict` on a duplicate id.
    pub fn insert(&self, fine: Fine) -> AppResult<Fine> {
        match self.fines.entry(fine.id) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Fine {} already exists",
                fine.id
            ))),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                debug!(fine_id = %fine.id, ticket = %fine.ticket_number, "Fine stored");
                entry.insert(fine.clone());
                Ok(fine)
            }
        }
    }

    /// Fetch a snapshot of a fine by id.
    pub fn get(&self, id: FineId) -> AppResult<Fine> {
        self.fines
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::not_found(format!("Fine {id} not found")))
    }

    /// Apply a checked mutation to a single fine under its exclusive lock.
    ///
    /// The closure receives a working copy; only if it succeeds is the
    /// copy written back, so a failed transition leaves the stored
    /// record byte-for-byte unchanged.
    pub fn update_with<T>(
        &self,
        id: FineId,
        f: impl FnOnce(&mut Fine) -> AppResult<T>,
    ) -> AppResult<(T, Fine)> {
        let mut entry = self
            .fines
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Fine {id} not found")))?;

        let mut candidate = entry.clone();
        let output = f(&mut candidate)?;
        *entry = candidate.clone();
        Ok((output, candidate))
    }

    /// Snapshot of every fine in the store.
    ///
    /// Each record is cloned under its own lock, so the result never
    /// contains a half-applied transition.
    pub fn all(&self) -> Vec<Fine> {
        self.fines.iter().map(|entry| entry.clone()).collect()
    }

    /// Number of stored fines.
    pub fn count(&self) -> usize {
        self.fines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use finexpress_core::error::ErrorKind;
    use finexpress_core::types::{ActorId, OffenseId};
    use finexpress_entity::fine::{FineAction, FineStatus, OffenseSnapshot};
    use finexpress_entity::offense::OffenseCategory;

    fn issue_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 19, 10, 30, 0).unwrap()
    }

    fn pending_fine() -> Fine {
        let issued = issue_time();
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
            driver_email: Some("dave.driver@example.com".into()),
            photo_reference: None,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = FineStore::new();
        let fine = pending_fine();
        store.insert(fine.clone()).unwrap();

        let found = store.get(fine.id).unwrap();
        assert_eq!(found.ticket_number, fine.ticket_number);
    }

    #[test]
    fn test_duplicate_insert_conflicts() {
        let store = FineStore::new();
        let fine = pending_fine();
        store.insert(fine.clone()).unwrap();

        let err = store.insert(fine).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[test]
    fn test_update_with_failure_leaves_record_unchanged() {
        let store = FineStore::new();
        let fine = pending_fine();
        let id = fine.id;
        store.insert(fine).unwrap();
        let now = issue_time() + Duration::days(1);

        // Closure that mutates, then fails: nothing may be written back.
        let err = store
            .update_with(id, |fine| {
                fine.status = FineStatus::Paid;
                fine.payment_date = Some(now);
                Err::<(), _>(AppError::invalid_transition("rejected"))
            })
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTransition);

        let stored = store.get(id).unwrap();
        assert_eq!(stored.status, FineStatus::Pending);
        assert!(stored.payment_date.is_none());
    }

    #[test]
    fn test_concurrent_pay_serializes_to_one_winner() {
        use std::sync::Arc;

        let store = Arc::new(FineStore::new());
        let fine = pending_fine();
        let id = fine.id;
        store.insert(fine).unwrap();
        let now = issue_time() + Duration::days(1);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.update_with(id, |fine| fine.apply_action(FineAction::Pay, now))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one concurrent payment must win");
        for result in results.iter().filter(|r| r.is_err()) {
            assert_eq!(
                result.as_ref().unwrap_err().kind,
                ErrorKind::InvalidTransition
            );
        }

        let stored = store.get(id).unwrap();
        assert_eq!(stored.status, FineStatus::Paid);
        assert_eq!(stored.payment_date, Some(now));
    }

    #[test]
    fn test_all_returns_snapshots() {
        let store = FineStore::new();
        store.insert(pending_fine()).unwrap();
        store.insert(pending_fine()).unwrap();

        assert_eq!(store.all().len(), 2);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = FineStore::new();
        let err = store.get(FineId::new()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
