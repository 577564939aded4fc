//! # finexpress-core
//!
//! Core crate for FineXpress. Contains configuration schemas, typed
//! identifiers, domain events, pagination and time-window types, the
//! clock seam, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FineXpress crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
