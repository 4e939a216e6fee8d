//! Printable sheet rendering.
//!
//! The core hands a renderer the ordered pool assignment sequence and nothing
//! else; everything about the printed artifact lives behind [`SheetRenderer`].
//! Two implementations ship: a fixed-width text renderer producing one
//! pass/fail scoresheet page per pool, and a JSON renderer that exports the
//! assignment sequence for downstream tooling.

mod layout;

use std::io::Write;

use chrono::Local;
use tracing::info;

use crate::constants::sheet_layout::{
    AGE_WIDTH, CITY_WIDTH, CLUB_WIDTH, NAME_WIDTH, OUTCOME_LINES, POSITION_WIDTH, SHEET_WIDTH,
    WEIGHT_WIDTH,
};
use crate::error::AppError;
use crate::pools::PoolAssignment;

use layout::{center, pad};

/// Consumes the ordered assignment sequence and produces the printable (or
/// machine-readable) artifact.
pub trait SheetRenderer {
    fn render(&self, pools: &[PoolAssignment], out: &mut dyn Write) -> Result<(), AppError>;
}

/// Renders one fixed-width scoresheet page per pool, separated by form feeds
/// so the document prints one pool per page.
///
/// Each page carries the tournament title, the pool heading, the player table
/// (state deliberately omitted from the printed columns), a winner line and
/// four outcome placeholder lines to be filled in by hand at the mat.
#[derive(Debug, Clone)]
pub struct TextSheetRenderer {
    tournament_name: String,
    /// Timestamp footer can be disabled for reproducible output in tests.
    show_timestamp: bool,
}

impl TextSheetRenderer {
    pub fn new(tournament_name: impl Into<String>) -> Self {
        Self {
            tournament_name: tournament_name.into(),
            show_timestamp: true,
        }
    }

    /// Disables the generation timestamp footer.
    pub fn without_timestamp(mut self) -> Self {
        self.show_timestamp = false;
        self
    }

    fn write_page(&self, pool: &PoolAssignment, out: &mut dyn Write) -> Result<(), AppError> {
        let rule = "=".repeat(SHEET_WIDTH);

        writeln!(out, "{rule}")?;
        writeln!(out, "{}", center(&self.tournament_name, SHEET_WIDTH))?;
        writeln!(out, "{}", center(&pool.heading(), SHEET_WIDTH))?;
        writeln!(out, "{rule}")?;
        writeln!(out)?;

        writeln!(
            out,
            "{}{}{}{}{}{}",
            pad("No.", POSITION_WIDTH),
            pad("Name", NAME_WIDTH),
            pad("Age", AGE_WIDTH),
            pad("Weight (kg)", WEIGHT_WIDTH),
            pad("Club", CLUB_WIDTH),
            pad("City", CITY_WIDTH),
        )?;
        writeln!(out, "{}", "-".repeat(SHEET_WIDTH))?;

        for (position, player) in pool.players.iter().enumerate() {
            writeln!(
                out,
                "{}{}{}{}{}{}",
                pad(&(position + 1).to_string(), POSITION_WIDTH),
                pad(&player.name, NAME_WIDTH),
                pad(&player.age_display(), AGE_WIDTH),
                pad(&player.weight_display(), WEIGHT_WIDTH),
                pad(&player.club, CLUB_WIDTH),
                pad(&player.city, CITY_WIDTH),
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Winner name: _______________________")?;
        writeln!(out)?;
        for line in 1..=OUTCOME_LINES {
            writeln!(out, "{line}) ___________________________")?;
        }

        if self.show_timestamp {
            writeln!(out)?;
            writeln!(
                out,
                "Generated {}",
                Local::now().format("%Y-%m-%d %H:%M")
            )?;
        }

        Ok(())
    }
}

impl SheetRenderer for TextSheetRenderer {
    fn render(&self, pools: &[PoolAssignment], out: &mut dyn Write) -> Result<(), AppError> {
        for (index, pool) in pools.iter().enumerate() {
            if index > 0 {
                // Form feed starts each pool on its own printed page
                write!(out, "\u{c}")?;
            }
            self.write_page(pool, out)?;
        }
        out.flush()?;
        info!("Rendered {} scoresheet page(s)", pools.len());
        Ok(())
    }
}

/// Exports the assignment sequence as pretty-printed JSON. The structure is
/// exactly the output boundary: division label, 1-based pool index, seeded
/// player list.
#[derive(Debug, Clone, Default)]
pub struct JsonAssignmentRenderer;

impl SheetRenderer for JsonAssignmentRenderer {
    fn render(&self, pools: &[PoolAssignment], out: &mut dyn Write) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut *out, pools)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
