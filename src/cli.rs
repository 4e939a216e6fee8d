use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Tournament Pool Sheet Generator
///
/// Reads a roster CSV of tournament entries, assigns every player to an
/// age/weight/gender division, seeds each division into pools of four with
/// an anti-clustering rule (same-club or same-state pairs are kept apart in
/// the first round where possible), and writes one printable pass/fail
/// scoresheet per pool.
///
/// The roster must carry the columns: name, age, weight, gender, club, city,
/// state. Extra columns are ignored.
#[derive(Parser, Debug)]
#[command(author = "Bracket Sheets contributors", about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to the roster CSV file. Required unless a config operation is
    /// requested.
    #[arg(value_name = "ROSTER")]
    pub roster: Option<PathBuf>,

    /// Tournament title printed at the top of every sheet.
    #[arg(
        short = 't',
        long = "title",
        help_heading = "Output Options",
        default_value = "Tournament"
    )]
    pub title: String,

    /// Write the rendered document to this file instead of stdout.
    #[arg(short = 'o', long = "output", help_heading = "Output Options")]
    pub output: Option<PathBuf>,

    /// Emit the pool assignments as JSON instead of printable sheets.
    /// The structure mirrors the renderer boundary: division label, 1-based
    /// group index, seeded player list.
    #[arg(long = "json", help_heading = "Output Options")]
    pub json: bool,

    /// List current configuration settings (weight-class table, log location)
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Enable debug mode: info logs are echoed to stdout in addition to the
    /// log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,
}
