//! Admin-gated offense catalog maintenance.

pub mod service;

pub use service::OffenseService;
