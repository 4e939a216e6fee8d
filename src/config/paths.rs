use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
/// - `BRACKET_SHEETS_CONFIG` overrides the whole path
pub fn get_config_path() -> String {
    if let Ok(custom) = std::env::var("BRACKET_SHEETS_CONFIG") {
        return custom;
    }
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("bracket_sheets")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("bracket_sheets")
        .join("logs")
        .to_string_lossy()
        .to_string()
}
