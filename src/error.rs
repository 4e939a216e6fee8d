use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read roster file: {0}")]
    RosterRead(#[from] csv::Error),

    // Boundary validation: the roster must carry every required column before
    // any record reaches the classifier
    #[error("Roster file is missing required columns: {columns}")]
    MissingColumns { columns: String },

    #[error("Roster file contains no player rows: {path}")]
    EmptyRoster { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a missing-columns error from the list of absent headers
    pub fn missing_columns(columns: &[&str]) -> Self {
        Self::MissingColumns {
            columns: columns.join(", "),
        }
    }

    /// Create an empty-roster error for the given path
    pub fn empty_roster(path: impl Into<String>) -> Self {
        Self::EmptyRoster { path: path.into() }
    }

    /// Check if error originates at the roster input boundary
    #[allow(dead_code)]
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            AppError::RosterRead(_)
                | AppError::MissingColumns { .. }
                | AppError::EmptyRoster { .. }
        )
    }
}
