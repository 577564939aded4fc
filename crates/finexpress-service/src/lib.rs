//! # finexpress-service
//!
//! The external interface of the fine lifecycle core: fine issuance and
//! status transitions, admin-gated offense catalog maintenance, and the
//! role-scoped reporting engine. Every operation takes the acting
//! [`Actor`](finexpress_entity::actor::Actor) and consults the scope
//! resolver before reading or mutating anything.

pub mod fine;
pub mod offense;
pub mod report;
pub mod telemetry;

pub use fine::{CreateFineRequest, FineQuery, FineService};
pub use offense::OffenseService;
pub use report::{FineReport, ReportService};
