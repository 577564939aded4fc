//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use finexpress_core::config::policy::PolicyConfig;
use finexpress_core::events::EventBus;
use finexpress_core::traits::clock::FixedClock;
use finexpress_core::types::ActorId;
use finexpress_entity::actor::{Actor, ActorRole};
use finexpress_entity::fine::Fine;
use finexpress_entity::offense::Offense;
use finexpress_service::{CreateFineRequest, FineService, OffenseService, ReportService};
use finexpress_store::{FineStore, OffenseCatalog};

/// The instant every test clock starts at.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 19, 10, 30, 0).unwrap()
}

/// A fully wired fine lifecycle stack over a controllable clock.
pub struct TestApp {
    pub clock: Arc<FixedClock>,
    pub events: EventBus,
    pub fines: FineService,
    pub offenses: OffenseService,
    pub reports: ReportService,
}

impl TestApp {
    /// Build the stack and seed the standard offense catalog.
    pub async fn new() -> Self {
        let clock = Arc::new(FixedClock::new(start_time()));
        let catalog = Arc::new(OffenseCatalog::new());
        let store = Arc::new(FineStore::new());
        let events = EventBus::default();

        let fines = FineService::new(
            Arc::clone(&catalog),
            Arc::clone(&store),
            clock.clone(),
            PolicyConfig::default(),
            events.clone(),
        );
        let offenses = OffenseService::new(Arc::clone(&catalog), clock.clone(), events.clone());
        let reports = ReportService::new(Arc::clone(&store), clock.clone());

        offenses.seed_defaults().await.expect("seed catalog");

        Self {
            clock,
            events,
            fines,
            offenses,
            reports,
        }
    }

    /// A fresh officer actor.
    pub fn officer(&self, name: &str) -> Actor {
        Actor::new(
            ActorId::new(),
            name,
            format!("{}@pd.example", name.to_lowercase()),
            ActorRole::Officer,
        )
    }

    /// A fresh administrator actor.
    pub fn admin(&self) -> Actor {
        Actor::new(
            ActorId::new(),
            "Ann Admin",
            "ann.admin@example.com",
            ActorRole::Administrator,
        )
    }

    /// A fresh driver actor with the given email.
    pub fn driver(&self, email: &str) -> Actor {
        Actor::new(ActorId::new(), "Dave Driver", email, ActorRole::Driver)
    }

    /// Look up a seeded offense by code.
    pub async fn offense_by_code(&self, code: &str) -> Offense {
        self.offenses
            .search(code)
            .await
            .into_iter()
            .find(|o| o.code == code)
            .unwrap_or_else(|| panic!("offense {code} not seeded"))
    }

    /// Issue a fine for the given offense code.
    pub async fn issue(
        &self,
        officer: &Actor,
        code: &str,
        plate: &str,
        driver_email: Option<&str>,
    ) -> Fine {
        let offense = self.offense_by_code(code).await;
        self.fines
            .create_fine(
                officer,
                CreateFineRequest {
                    license_plate: plate.to_string(),
                    offense_id: offense.id,
                    location: "Main St & 5th Ave".to_string(),
                    notes: None,
                    driver_email: driver_email.map(str::to_string),
                    photo_reference: None,
                },
            )
            .await
            .expect("issue fine")
    }
}
