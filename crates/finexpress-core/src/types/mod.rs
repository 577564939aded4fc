//! Shared type primitives: typed identifiers, pagination, time windows.

pub mod id;
pub mod pagination;
pub mod window;

pub use id::{ActorId, FineId, OffenseId};
pub use pagination::{PageRequest, PageResponse};
pub use window::TimeWindow;
