//! Fine lifecycle service.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use finexpress_auth::gate::{authorize_action, require_officer};
use finexpress_auth::scope::FineScope;
use finexpress_core::config::policy::PolicyConfig;
use finexpress_core::events::{DomainEvent, EventBus, EventPayload, FineEvent};
use finexpress_core::traits::Clock;
use finexpress_core::types::{FineId, PageRequest, PageResponse};
use finexpress_core::{AppError, AppResult};
use finexpress_entity::actor::Actor;
use finexpress_entity::fine::{Fine, FineAction, FineStatus, OffenseSnapshot, TicketGenerator};
use finexpress_store::{FineStore, OffenseCatalog};

use super::request::{CreateFineRequest, FineQuery};

/// Handles fine issuance, checked status transitions, and scoped queries.
///
/// Every mutation goes through the access gates before it is attempted,
/// and every query path reports the read-time Overdue projection rather
/// than the raw stored status.
pub struct FineService {
    /// Offense catalog, consulted at issuance for the amount snapshot.
    catalog: Arc<OffenseCatalog>,
    /// Fine record store.
    store: Arc<FineStore>,
    /// Ticket number allocator.
    tickets: TicketGenerator,
    /// Clock seam for issue dates and the overdue projection.
    clock: Arc<dyn Clock>,
    /// Issuance policy (grace period).
    policy: PolicyConfig,
    /// Domain event bus.
    events: EventBus,
}

impl FineService {
    /// Creates a new fine service.
    pub fn new(
        catalog: Arc<OffenseCatalog>,
        store: Arc<FineStore>,
        clock: Arc<dyn Clock>,
        policy: PolicyConfig,
        events: EventBus,
    ) -> Self {
        let tickets = TicketGenerator::new(policy.ticket_prefix.clone());
        Self {
            catalog,
            store,
            tickets,
            clock,
            policy,
            events,
        }
    }

    /// Issue a new fine. Officer capability required.
    ///
    /// The amount, code, description, and category are snapshotted from
    /// the cited offense so later catalog edits never change this fine.
    pub async fn create_fine(&self, actor: &Actor, request: CreateFineRequest) -> AppResult<Fine> {
        require_officer(actor)?;

        request
            .validate()
            .map_err(|e| AppError::invalid_input(format!("Invalid fine request: {e}")))?;

        let license_plate = request.license_plate.trim().to_uppercase();
        let location = request.location.trim().to_string();
        if license_plate.is_empty() {
            return Err(AppError::invalid_input("License plate is required"));
        }
        if location.is_empty() {
            return Err(AppError::invalid_input("Location is required"));
        }

        let offense = self.catalog.find(request.offense_id).await.map_err(|_| {
            AppError::invalid_reference(format!(
                "Offense {} does not exist",
                request.offense_id
            ))
        })?;

        let now = self.clock.now();
        let fine = Fine {
            id: FineId::new(),
            ticket_number: self.tickets.next(now),
            license_plate,
            offense_id: offense.id,
            offense: OffenseSnapshot::from(&offense),
            amount: offense.amount,
            status: FineStatus::Pending,
            issue_date: now,
            due_date: now + self.policy.grace_period(),
            payment_date: None,
            location,
            issued_by: actor.id,
            notes: request.notes.filter(|n| !n.trim().is_empty()),
            driver_email: request.driver_email.map(|e| e.to_lowercase()),
            photo_reference: request.photo_reference,
        };

        let fine = self.store.insert(fine)?;

        info!(
            fine_id = %fine.id,
            ticket = %fine.ticket_number,
            officer = %actor.id,
            amount = fine.amount,
            "Fine issued"
        );
        self.events.publish(DomainEvent::new(
            actor.id,
            now,
            EventPayload::Fine(FineEvent::Issued {
                fine_id: fine.id,
                ticket_number: fine.ticket_number.clone(),
                amount: fine.amount,
            }),
        ));

        Ok(fine)
    }

    /// Attempt a state-machine action on a fine.
    ///
    /// Authorization is checked first (`Forbidden` on failure), then the
    /// transition is validated against the current persisted status
    /// under the record's exclusive lock (`InvalidTransition` on
    /// failure, record unchanged).
    pub async fn transition(
        &self,
        actor: &Actor,
        fine_id: FineId,
        action: FineAction,
    ) -> AppResult<Fine> {
        let fine = self.store.get(fine_id)?;
        authorize_action(actor, &fine, action)?;

        let now = self.clock.now();
        let (previous, updated) = self
            .store
            .update_with(fine_id, |fine| fine.apply_action(action, now))?;

        info!(
            fine_id = %fine_id,
            ticket = %updated.ticket_number,
            actor = %actor.id,
            %action,
            from = %previous,
            to = %updated.status,
            "Fine transitioned"
        );
        self.events.publish(DomainEvent::new(
            actor.id,
            now,
            EventPayload::Fine(FineEvent::StatusChanged {
                fine_id,
                from: previous.as_str().to_string(),
                to: updated.status.as_str().to_string(),
            }),
        ));

        Ok(updated)
    }

    /// Fetch a single fine visible to the actor, with the projected status.
    ///
    /// Out-of-scope ids answer `NotFound` rather than `Forbidden` so a
    /// caller cannot probe for the existence of other actors' fines.
    pub async fn get_fine(&self, actor: &Actor, fine_id: FineId) -> AppResult<Fine> {
        let fine = self.store.get(fine_id)?;
        if !FineScope::for_actor(actor).permits(&fine) {
            return Err(AppError::not_found(format!("Fine {fine_id} not found")));
        }
        Ok(self.project(fine))
    }

    /// List the fines visible to the actor, newest first.
    ///
    /// The query's free-text search and status filter are applied after
    /// the visibility scope; the status filter matches the projected
    /// status, so filtering on `Overdue` finds stored-pending fines
    /// whose due date has elapsed.
    pub async fn list_fines(&self, actor: &Actor, query: &FineQuery) -> AppResult<Vec<Fine>> {
        let scope = FineScope::for_actor(actor);
        let now = self.clock.now();

        let mut fines: Vec<Fine> = self
            .store
            .all()
            .into_iter()
            .filter(|fine| scope.permits(fine))
            .map(|mut fine| {
                fine.status = fine.effective_status(now);
                fine
            })
            .filter(|fine| match &query.search {
                Some(text) if !text.trim().is_empty() => fine.matches_search(text.trim()),
                _ => true,
            })
            .filter(|fine| match query.status {
                Some(status) => fine.status == status,
                None => true,
            })
            .collect();

        fines.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
        Ok(fines)
    }

    /// Paged variant of [`FineService::list_fines`].
    pub async fn list_fines_page(
        &self,
        actor: &Actor,
        query: &FineQuery,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Fine>> {
        let fines = self.list_fines(actor, query).await?;
        let total = fines.len() as u64;
        let items = fines
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    /// Apply the read-time Overdue projection to a snapshot.
    fn project(&self, mut fine: Fine) -> Fine {
        fine.status = fine.effective_status(self.clock.now());
        fine
    }
}
