//! Roster input boundary.
//!
//! The core never cares where player records come from; anything that can
//! produce a sequence of [`PlayerRecord`]s can feed a run. The shipped
//! implementation reads a CSV export of the entry spreadsheet and validates
//! the required columns before any record reaches the classifier.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::REQUIRED_COLUMNS;
use crate::error::AppError;

use super::models::PlayerRecord;

/// A source of player records for one tournament run.
///
/// Implementations must yield records in entry order; that order is the base
/// seeding for every division and must be stable across calls.
pub trait PlayerSource {
    /// Produce the full player sequence for this run.
    fn players(&self) -> Result<Vec<PlayerRecord>, AppError>;
}

/// CSV-backed roster reader.
///
/// The file must carry a header row containing at least the columns
/// `name, age, weight, gender, club, city, state`. Extra columns are ignored,
/// column order does not matter, and field values are passed through as text.
#[derive(Debug, Clone)]
pub struct CsvRoster {
    path: PathBuf,
}

impl CsvRoster {
    /// Creates a reader for the roster file at `path`. The file is not opened
    /// until [`PlayerSource::players`] is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the columns from `REQUIRED_COLUMNS` that are absent from the
    /// header row. Header matching is exact, like the original entry template.
    fn missing_columns(headers: &csv::StringRecord) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|required| !headers.iter().any(|h| h == **required))
            .copied()
            .collect()
    }
}

impl PlayerSource for CsvRoster {
    fn players(&self) -> Result<Vec<PlayerRecord>, AppError> {
        let mut reader = csv::Reader::from_path(&self.path)?;

        let missing = Self::missing_columns(reader.headers()?);
        if !missing.is_empty() {
            return Err(AppError::missing_columns(&missing));
        }

        let mut players = Vec::new();
        for row in reader.deserialize::<PlayerRecord>() {
            players.push(row?);
        }

        if players.is_empty() {
            return Err(AppError::empty_roster(self.path.to_string_lossy()));
        }

        info!(
            "Read {} player entries from {}",
            players.len(),
            self.path.display()
        );
        Ok(players)
    }
}
