//! Report data model.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finexpress_core::types::TimeWindow;
use finexpress_entity::fine::{Fine, FineStatus};

/// Aggregated financial and operational figures over a fine collection.
///
/// All monetary fields are integer minor currency units; conversion to
/// displayable major units happens only at export time. Statuses are
/// the read-time projections at `generated_at`, and breakdowns omit
/// zero-count entries rather than emitting them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineReport {
    /// The time window the report covers, applied to issue dates.
    pub window: TimeWindow,
    /// When the report was computed (the projection reference instant).
    pub generated_at: DateTime<Utc>,
    /// Number of fines in the window.
    pub total_count: u64,
    /// Sum of all fine amounts, regardless of status.
    pub total_amount: i64,
    /// Sum of amounts over fines whose projected status is `Paid`.
    pub paid_amount: i64,
    /// Sum of amounts over fines whose projected status is `Pending`
    /// or `Overdue` — an overdue fine still counts as outstanding.
    pub pending_amount: i64,
    /// `paid_amount / total_amount`; exactly `0.0` when nothing was issued.
    pub collection_rate: f64,
    /// Offense description (from each fine's snapshot) to fine count.
    pub offense_distribution: BTreeMap<String, u64>,
    /// Projected status to fine count; zero-count statuses are absent.
    pub status_distribution: BTreeMap<FineStatus, u64>,
    /// Offense description to summed issued amount, independent of
    /// status (issued revenue, not collected revenue).
    pub revenue_by_offense: BTreeMap<String, i64>,
}

impl FineReport {
    /// Compute a report over already scope-filtered fines.
    ///
    /// `now` is both the window anchor and the projection reference, so
    /// a single report is internally consistent.
    pub fn compute(fines: &[Fine], window: TimeWindow, now: DateTime<Utc>) -> Self {
        let mut report = Self {
            window,
            generated_at: now,
            total_count: 0,
            total_amount: 0,
            paid_amount: 0,
            pending_amount: 0,
            collection_rate: 0.0,
            offense_distribution: BTreeMap::new(),
            status_distribution: BTreeMap::new(),
            revenue_by_offense: BTreeMap::new(),
        };

        for fine in fines {
            if !window.contains(fine.issue_date, now) {
                continue;
            }
            let status = fine.effective_status(now);

            report.total_count += 1;
            report.total_amount += fine.amount;
            match status {
                FineStatus::Paid => report.paid_amount += fine.amount,
                FineStatus::Pending | FineStatus::Overdue => {
                    report.pending_amount += fine.amount;
                }
                FineStatus::Disputed | FineStatus::Canceled => {}
            }

            *report
                .offense_distribution
                .entry(fine.offense.description.clone())
                .or_insert(0) += 1;
            *report.status_distribution.entry(status).or_insert(0) += 1;
            *report
                .revenue_by_offense
                .entry(fine.offense.description.clone())
                .or_insert(0) += fine.amount;
        }

        if report.total_amount > 0 {
            report.collection_rate = report.paid_amount as f64 / report.total_amount as f64;
        }

        report
    }
}
