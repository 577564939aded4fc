//! Offense catalog entry model.

pub mod category;
pub mod model;

pub use category::OffenseCategory;
pub use model::{CreateOffense, Offense, UpdateOffense};
