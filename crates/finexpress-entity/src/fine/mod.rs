//! Fine record, status state machine, and ticket number generation.

pub mod action;
pub mod model;
pub mod status;
pub mod ticket;

pub use action::{DisputeOutcome, FineAction};
pub use model::{Fine, OffenseSnapshot};
pub use status::FineStatus;
pub use ticket::TicketGenerator;
