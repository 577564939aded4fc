//! Actor model and role enumeration.

pub mod model;
pub mod role;

pub use model::Actor;
pub use role::ActorRole;
