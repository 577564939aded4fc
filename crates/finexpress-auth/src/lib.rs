//! # finexpress-auth
//!
//! Access control for the fine lifecycle: the scope resolver that
//! computes per-role visibility predicates, the mutation gates consulted
//! before every state-machine transition, and the authenticator seam the
//! external credential layer implements.

pub mod authenticator;
pub mod gate;
pub mod scope;

pub use authenticator::{Authenticator, Credentials};
pub use gate::{authorize_action, require_admin, require_officer};
pub use scope::FineScope;
