//! Fine issuance, transitions, and scoped queries.

pub mod request;
pub mod service;

pub use request::{CreateFineRequest, FineQuery};
pub use service::FineService;
