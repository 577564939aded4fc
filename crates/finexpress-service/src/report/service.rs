//! Report generation over the actor's visibility scope.

use std::sync::Arc;

use tracing::debug;

use finexpress_auth::scope::FineScope;
use finexpress_core::traits::Clock;
use finexpress_core::types::TimeWindow;
use finexpress_core::AppResult;
use finexpress_entity::actor::Actor;
use finexpress_entity::fine::Fine;
use finexpress_store::FineStore;

use super::export;
use super::model::FineReport;

/// Computes time-windowed reports over the fines an actor may see.
///
/// Reporting is read-only aggregation over a snapshot of the store; it
/// runs in parallel with transitions and never observes a half-applied
/// one.
pub struct ReportService {
    /// Fine record store.
    store: Arc<FineStore>,
    /// Clock seam; the same instant anchors the window and the
    /// overdue projection.
    clock: Arc<dyn Clock>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(store: Arc<FineStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Generate a report for the actor over the given time window.
    ///
    /// A driver gets figures over their claimed fines, an officer over
    /// their own issuances, an administrator over everything.
    pub async fn generate(&self, actor: &Actor, window: TimeWindow) -> AppResult<FineReport> {
        let scope = FineScope::for_actor(actor);
        let fines: Vec<Fine> = self
            .store
            .all()
            .into_iter()
            .filter(|fine| scope.permits(fine))
            .collect();

        let report = FineReport::compute(&fines, window, self.clock.now());
        debug!(
            actor = %actor.id,
            role = %actor.role,
            ?window,
            total_count = report.total_count,
            "Report generated"
        );
        Ok(report)
    }

    /// Render a report as delimited text (see [`export`]).
    pub fn export_csv(&self, report: &FineReport) -> AppResult<String> {
        export::to_csv(report)
    }
}
