//! Role-scoped reporting engine.

pub mod export;
pub mod model;
pub mod service;

pub use model::FineReport;
pub use service::ReportService;
