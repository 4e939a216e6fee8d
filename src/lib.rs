//! Tournament Pool Sheet Generator Library
//!
//! This library turns a roster of tournament entries into printable pool
//! scoresheets: every player is classified into an age/weight/gender
//! division, each division is seeded into pools of four with an
//! anti-clustering swap, and a renderer produces one sheet per pool.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bracket_sheets::classifier::WeightClassTable;
//! use bracket_sheets::division::bucket_players;
//! use bracket_sheets::error::AppError;
//! use bracket_sheets::pools::build_pools;
//! use bracket_sheets::roster::{CsvRoster, PlayerSource};
//! use bracket_sheets::sheet_ui::{SheetRenderer, TextSheetRenderer};
//!
//! fn main() -> Result<(), AppError> {
//!     // Read the entry roster
//!     let players = CsvRoster::new("entries.csv").players()?;
//!
//!     // Classify and seed the pools (empty table: no weight qualifiers)
//!     let buckets = bucket_players(players, &WeightClassTable::new());
//!     let pools = build_pools(&buckets);
//!
//!     // Render one printable scoresheet per pool to stdout
//!     let renderer = TextSheetRenderer::new("Spring Open 2026");
//!     renderer.render(&pools, &mut std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod division;
pub mod error;
pub mod grouper;
pub mod logging;
pub mod pools;
pub mod roster;
pub mod sheet_ui;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use classifier::{WeightClassTable, classify};
pub use config::Config;
pub use division::{DivisionBuckets, bucket_players};
pub use error::AppError;
pub use grouper::{Group, group_players};
pub use pools::{PoolAssignment, build_pools};
pub use roster::{CsvRoster, PlayerRecord, PlayerSource};
pub use sheet_ui::{JsonAssignmentRenderer, SheetRenderer, TextSheetRenderer};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
