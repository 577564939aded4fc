//! Offense entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finexpress_core::types::OffenseId;

use super::category::OffenseCategory;

/// A catalog entry defining a violation type.
///
/// Fines reference an offense by id and additionally carry an immutable
/// snapshot of its code, description, category, and amount taken at
/// issuance time, so catalog edits and deletions never retroactively
/// change already-issued fines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offense {
    /// Unique offense identifier.
    pub id: OffenseId,
    /// Short human mnemonic, unique within the catalog (e.g. `SPD-01`).
    pub code: String,
    /// Human-readable description of the violation.
    pub description: String,
    /// Base fine amount in minor currency units. Always positive.
    pub amount: i64,
    /// Severity classification.
    pub category: OffenseCategory,
    /// When the catalog entry was created.
    pub created_at: DateTime<Utc>,
    /// When the catalog entry was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new offense catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOffense {
    /// Offense code (unique, case-insensitive).
    pub code: String,
    /// Violation description.
    pub description: String,
    /// Base fine amount in minor currency units.
    pub amount: i64,
    /// Severity classification.
    pub category: OffenseCategory,
}

/// Partial update for an existing offense catalog entry.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOffense {
    /// New offense code.
    pub code: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New base amount in minor currency units.
    pub amount: Option<i64>,
    /// New category.
    pub category: Option<OffenseCategory>,
}

impl Offense {
    /// Whether this offense matches a case-insensitive substring query
    /// over code, description, or category.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.code.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.category.as_str().to_lowercase().contains(&q)
    }
}
