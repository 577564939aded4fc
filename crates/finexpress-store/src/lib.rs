//! # finexpress-store
//!
//! In-memory transactional record stores for FineXpress: the offense
//! catalog and the fine store. Each mutation is atomic with respect to
//! other operations on the same record id; reads hand out snapshot
//! clones so aggregation never observes a partially applied transition.

pub mod catalog;
pub mod fines;

pub use catalog::OffenseCatalog;
pub use fines::FineStore;
