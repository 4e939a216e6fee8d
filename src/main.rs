// src/main.rs
use std::fs::File;
use std::io::{BufWriter, Write, stdout};

use clap::Parser;
use tracing::info;

use bracket_sheets::cli::Args;
use bracket_sheets::config::Config;
use bracket_sheets::division::bucket_players;
use bracket_sheets::error::AppError;
use bracket_sheets::logging;
use bracket_sheets::pools::build_pools;
use bracket_sheets::roster::{CsvRoster, PlayerSource};
use bracket_sheets::sheet_ui::{JsonAssignmentRenderer, SheetRenderer, TextSheetRenderer};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration display without touching the roster
    if args.list_config {
        Config::display()?;
        return Ok(());
    }

    let Some(roster_path) = args.roster.clone() else {
        return Err(AppError::config_error(
            "No roster file given. Usage: bracket_sheets <ROSTER> [--title NAME] [--output FILE]",
        ));
    };

    let (log_file_path, _guard) = logging::setup_logging(&args)?;
    info!("Logs are being written to: {log_file_path}");

    let config = Config::load()?;
    if !config.weight_classes.is_empty() {
        info!(
            "Weight-class table loaded for {} division key(s)",
            config.weight_classes.len()
        );
    }

    // Input boundary: read the full roster up front; a missing column or an
    // empty file fails here, before any classification happens
    let players = CsvRoster::new(&roster_path).players()?;

    // Core: one classification pass, then pool every division
    let buckets = bucket_players(players, &config.weight_classes);
    info!("Bucketed roster into {} division(s)", buckets.len());
    let pools = build_pools(&buckets);

    // Output boundary: hand the assignment sequence to the chosen renderer
    let renderer: Box<dyn SheetRenderer> = if args.json {
        Box::new(JsonAssignmentRenderer)
    } else {
        Box::new(TextSheetRenderer::new(&args.title))
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            renderer.render(&pools, &mut writer)?;
            writer.flush()?;
            info!("Wrote {} pool sheet(s) to {}", pools.len(), path.display());
        }
        None => {
            let mut out = stdout().lock();
            renderer.render(&pools, &mut out)?;
        }
    }

    Ok(())
}
