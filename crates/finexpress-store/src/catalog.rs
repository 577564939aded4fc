//! Offense catalog store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use finexpress_core::types::OffenseId;
use finexpress_core::{AppError, AppResult};
use finexpress_entity::offense::{CreateOffense, Offense, UpdateOffense};

/// In-memory offense catalog.
///
/// Catalog mutations take the write lock, which makes the code
/// uniqueness check and the insert a single atomic step. Reads return
/// clones under the read lock.
#[derive(Debug, Default)]
pub struct OffenseCatalog {
    offenses: RwLock<HashMap<OffenseId, Offense>>,
}

impl OffenseCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new offense type.
    ///
    /// Fails with `InvalidInput` on a non-positive amount or empty
    /// code/description, and with `Conflict` on a duplicate code
    /// (case-insensitive).
    pub async fn create(&self, data: CreateOffense, now: DateTime<Utc>) -> AppResult<Offense> {
        let code = data.code.trim().to_uppercase();
        let description = data.description.trim().to_string();
        validate_fields(&code, &description, data.amount)?;

        let mut offenses = self.offenses.write().await;
        if offenses.values().any(|o| o.code.eq_ignore_ascii_case(&code)) {
            return Err(AppError::conflict(format!(
                "Offense code '{code}' already exists"
            )));
        }

        let offense = Offense {
            id: OffenseId::new(),
            code,
            description,
            amount: data.amount,
            category: data.category,
            created_at: now,
            updated_at: now,
        };
        offenses.insert(offense.id, offense.clone());

        debug!(offense_id = %offense.id, code = %offense.code, "Offense created");
        Ok(offense)
    }

    /// Edit an existing offense type. `None` fields are left unchanged.
    ///
    /// Validation matches [`OffenseCatalog::create`]; changing the code
    /// re-checks uniqueness. Fines issued before the edit keep their
    /// snapshot and are unaffected.
    pub async fn update(
        &self,
        id: OffenseId,
        fields: UpdateOffense,
        now: DateTime<Utc>,
    ) -> AppResult<Offense> {
        let mut offenses = self.offenses.write().await;

        // Resolve the id before the uniqueness check so a missing entry
        // answers NotFound even when the new code collides.
        if !offenses.contains_key(&id) {
            return Err(AppError::not_found(format!("Offense {id} not found")));
        }

        if let Some(code) = &fields.code {
            let code = code.trim().to_uppercase();
            if offenses
                .values()
                .any(|o| o.id != id && o.code.eq_ignore_ascii_case(&code))
            {
                return Err(AppError::conflict(format!(
                    "Offense code '{code}' already exists"
                )));
            }
        }

        let offense = offenses
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Offense {id} not found")))?;

        let mut updated = offense.clone();
        if let Some(code) = fields.code {
            updated.code = code.trim().to_uppercase();
        }
        if let Some(description) = fields.description {
            updated.description = description.trim().to_string();
        }
        if let Some(amount) = fields.amount {
            updated.amount = amount;
        }
        if let Some(category) = fields.category {
            updated.category = category;
        }
        validate_fields(&updated.code, &updated.description, updated.amount)?;

        updated.updated_at = now;
        *offense = updated.clone();

        debug!(offense_id = %id, "Offense updated");
        Ok(updated)
    }

    /// Remove an offense type.
    ///
    /// Deletion is permitted even while fines reference the id: every
    /// fine carries its own amount and description snapshot, so history
    /// degrades gracefully rather than failing to resolve.
    pub async fn delete(&self, id: OffenseId) -> AppResult<Offense> {
        let mut offenses = self.offenses.write().await;
        let removed = offenses
            .remove(&id)
            .ok_or_else(|| AppError::not_found(format!("Offense {id} not found")))?;

        debug!(offense_id = %id, code = %removed.code, "Offense deleted");
        Ok(removed)
    }

    /// Look up an offense by id.
    pub async fn find(&self, id: OffenseId) -> AppResult<Offense> {
        self.offenses
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Offense {id} not found")))
    }

    /// Case-insensitive substring search over code, description, and
    /// category. An empty query returns the whole catalog.
    pub async fn search(&self, query: &str) -> Vec<Offense> {
        let query = query.trim();
        let offenses = self.offenses.read().await;
        let mut results: Vec<Offense> = offenses
            .values()
            .filter(|o| query.is_empty() || o.matches_query(query))
            .cloned()
            .collect();
        results.sort_by(|a, b| a.code.cmp(&b.code));
        results
    }

    /// Snapshot of every catalog entry, sorted by code.
    pub async fn all(&self) -> Vec<Offense> {
        self.search("").await
    }

    /// Number of catalog entries.
    pub async fn count(&self) -> usize {
        self.offenses.read().await.len()
    }
}

fn validate_fields(code: &str, description: &str, amount: i64) -> AppResult<()> {
    if code.is_empty() {
        return Err(AppError::invalid_input("Offense code is required"));
    }
    if description.is_empty() {
        return Err(AppError::invalid_input("Offense description is required"));
    }
    if amount <= 0 {
        return Err(AppError::invalid_input(
            "Offense amount must be a positive number of minor currency units",
        ));
    }
    Ok(())
}
