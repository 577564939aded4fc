//! Request DTOs for fine operations, with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use finexpress_core::types::OffenseId;
use finexpress_entity::fine::FineStatus;

/// Data an officer submits when issuing a fine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFineRequest {
    /// License plate of the offending vehicle.
    #[validate(length(min = 1, message = "License plate is required"))]
    pub license_plate: String,
    /// The offense being cited. Must resolve in the catalog.
    pub offense_id: OffenseId,
    /// Where the violation occurred.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Optional officer notes.
    pub notes: Option<String>,
    /// Optional driver email association. Without it the fine is not
    /// yet claimable by any driver.
    #[validate(email(message = "Driver email must be a valid address"))]
    pub driver_email: Option<String>,
    /// Optional opaque handle to photo evidence stored externally.
    pub photo_reference: Option<String>,
}

/// Filters for listing fines. All filters are applied after the
/// actor's visibility scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FineQuery {
    /// Case-insensitive free-text search over ticket number, license
    /// plate, offense description, and location.
    pub search: Option<String>,
    /// Restrict to a single status, matched against the read-time
    /// projected status.
    pub status: Option<FineStatus>,
}
