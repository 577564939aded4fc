//! Authenticator seam.
//!
//! Credential verification and session persistence live outside this
//! core. The external layer implements [`Authenticator`] and hands the
//! resulting [`Actor`] into every service call; nothing in this
//! workspace stores or checks passwords.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use finexpress_core::AppResult;
use finexpress_entity::actor::Actor;

/// Opaque credentials forwarded to the external authentication layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Login identifier (email).
    pub email: String,
    /// Secret; never logged by this core.
    pub password: String,
}

/// External authentication boundary.
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    /// Verify credentials and produce the acting identity.
    async fn authenticate(&self, credentials: &Credentials) -> AppResult<Actor>;
}
