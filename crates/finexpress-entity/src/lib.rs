//! # finexpress-entity
//!
//! Domain models for FineXpress: actors and their roles, the offense
//! catalog entry, and the fine record with its status state machine.

pub mod actor;
pub mod fine;
pub mod offense;
