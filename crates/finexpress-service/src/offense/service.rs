//! Offense catalog service.

use std::sync::Arc;

use tracing::info;

use finexpress_auth::gate::require_admin;
use finexpress_core::events::{DomainEvent, EventBus, EventPayload, OffenseEvent};
use finexpress_core::traits::Clock;
use finexpress_core::types::OffenseId;
use finexpress_core::AppResult;
use finexpress_entity::actor::Actor;
use finexpress_entity::offense::{CreateOffense, Offense, OffenseCategory, UpdateOffense};
use finexpress_store::OffenseCatalog;

/// The standard catalog shipped with the system, seeded at bootstrap.
const DEFAULT_OFFENSES: &[(&str, &str, i64, OffenseCategory)] = &[
    ("SPD-01", "Speeding (10-20 km/h over limit)", 5000, OffenseCategory::Minor),
    ("SPD-02", "Speeding (20-40 km/h over limit)", 10000, OffenseCategory::Major),
    ("SPD-03", "Speeding (40+ km/h over limit)", 20000, OffenseCategory::Critical),
    ("RLT-01", "Running a red light", 15000, OffenseCategory::Major),
    ("STP-01", "Failure to stop at stop sign", 7500, OffenseCategory::Minor),
    ("DWI-01", "Driving without insurance", 25000, OffenseCategory::Critical),
    ("DWL-01", "Driving without license", 15000, OffenseCategory::Major),
    ("PZV-01", "Parking in no-parking zone", 3500, OffenseCategory::Minor),
    ("MTH-01", "Mobile phone use while driving", 10000, OffenseCategory::Major),
    ("SBT-01", "Not wearing seatbelt", 5000, OffenseCategory::Minor),
];

/// Handles offense catalog maintenance.
///
/// Mutations require the administrator capability; catalog reads are
/// open to every role, since officers pick an offense when issuing.
pub struct OffenseService {
    /// The catalog store.
    catalog: Arc<OffenseCatalog>,
    /// Clock seam for created/updated timestamps.
    clock: Arc<dyn Clock>,
    /// Domain event bus.
    events: EventBus,
}

impl OffenseService {
    /// Creates a new offense service.
    pub fn new(catalog: Arc<OffenseCatalog>, clock: Arc<dyn Clock>, events: EventBus) -> Self {
        Self {
            catalog,
            clock,
            events,
        }
    }

    /// Add a new offense type. Administrator only.
    pub async fn create(&self, actor: &Actor, data: CreateOffense) -> AppResult<Offense> {
        require_admin(actor)?;

        let now = self.clock.now();
        let offense = self.catalog.create(data, now).await?;

        info!(offense_id = %offense.id, code = %offense.code, admin = %actor.id, "Offense created");
        self.events.publish(DomainEvent::new(
            actor.id,
            now,
            EventPayload::Offense(OffenseEvent::Created {
                offense_id: offense.id,
                code: offense.code.clone(),
            }),
        ));

        Ok(offense)
    }

    /// Edit an existing offense type. Administrator only.
    ///
    /// Already-issued fines keep their snapshot; the edit affects only
    /// fines issued afterwards.
    pub async fn update(
        &self,
        actor: &Actor,
        id: OffenseId,
        fields: UpdateOffense,
    ) -> AppResult<Offense> {
        require_admin(actor)?;

        let changed_fields = changed_field_names(&fields);
        let now = self.clock.now();
        let offense = self.catalog.update(id, fields, now).await?;

        info!(offense_id = %id, admin = %actor.id, ?changed_fields, "Offense updated");
        self.events.publish(DomainEvent::new(
            actor.id,
            now,
            EventPayload::Offense(OffenseEvent::Updated {
                offense_id: id,
                changed_fields,
            }),
        ));

        Ok(offense)
    }

    /// Remove an offense type. Administrator only.
    ///
    /// Existing fines referencing the id are unaffected: they resolve
    /// description and amount from their own snapshot.
    pub async fn delete(&self, actor: &Actor, id: OffenseId) -> AppResult<Offense> {
        require_admin(actor)?;

        let removed = self.catalog.delete(id).await?;
        let now = self.clock.now();

        info!(offense_id = %id, code = %removed.code, admin = %actor.id, "Offense deleted");
        self.events.publish(DomainEvent::new(
            actor.id,
            now,
            EventPayload::Offense(OffenseEvent::Deleted {
                offense_id: id,
                code: removed.code.clone(),
            }),
        ));

        Ok(removed)
    }

    /// Look up an offense by id. Open to every role.
    pub async fn find(&self, id: OffenseId) -> AppResult<Offense> {
        self.catalog.find(id).await
    }

    /// Case-insensitive substring search over code, description, and
    /// category. Open to every role.
    pub async fn search(&self, query: &str) -> Vec<Offense> {
        self.catalog.search(query).await
    }

    /// Seed the standard offense catalog, skipping codes that already
    /// exist. Intended for bootstrap, not actor-facing.
    pub async fn seed_defaults(&self) -> AppResult<Vec<Offense>> {
        let now = self.clock.now();
        let existing = self.catalog.all().await;
        let mut seeded = Vec::new();

        for &(code, description, amount, category) in DEFAULT_OFFENSES {
            if existing.iter().any(|o| o.code.eq_ignore_ascii_case(code)) {
                continue;
            }
            let offense = self
                .catalog
                .create(
                    CreateOffense {
                        code: code.to_string(),
                        description: description.to_string(),
                        amount,
                        category,
                    },
                    now,
                )
                .await?;
            seeded.push(offense);
        }

        info!(count = seeded.len(), "Default offense catalog seeded");
        Ok(seeded)
    }
}

fn changed_field_names(fields: &UpdateOffense) -> Vec<String> {
    let mut names = Vec::new();
    if fields.code.is_some() {
        names.push("code".to_string());
    }
    if fields.description.is_some() {
        names.push("description".to_string());
    }
    if fields.amount.is_some() {
        names.push("amount".to_string());
    }
    if fields.category.is_some() {
        names.push("category".to_string());
    }
    names
}
