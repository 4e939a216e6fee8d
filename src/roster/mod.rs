//! Roster ingestion: the player record model and the tabular input boundary.

pub mod models;
pub mod source;

pub use models::PlayerRecord;
pub use source::{CsvRoster, PlayerSource};
