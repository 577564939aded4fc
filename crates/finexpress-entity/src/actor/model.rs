//! Actor entity model.

use serde::{Deserialize, Serialize};

use finexpress_core::types::ActorId;

use super::role::ActorRole;

/// An authenticated principal acting against the fine system.
///
/// Actors are produced by the external authentication layer and are never
/// persisted here; the core only consumes the identity, role, and email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique actor identifier.
    pub id: ActorId,
    /// Human-readable display name.
    pub name: String,
    /// Email address, stored lowercase. For drivers this is the
    /// claim-association key that scopes fine visibility.
    pub email: String,
    /// The actor's role.
    pub role: ActorRole,
}

impl Actor {
    /// Create a new actor, normalizing the email to lowercase.
    pub fn new(id: ActorId, name: impl Into<String>, email: impl Into<String>, role: ActorRole) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into().to_lowercase(),
            role,
        }
    }

    /// Check if this actor has administrator privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalized() {
        let actor = Actor::new(
            ActorId::new(),
            "Dave Driver",
            "Dave.Driver@Example.com",
            ActorRole::Driver,
        );
        assert_eq!(actor.email, "dave.driver@example.com");
    }
}
