//! Command-line argument definition and processing.

use clap::Parser;

use crate::app::RunOptions;
use crate::theme::Settings;

/// Wherein - browse the countries of the world from your terminal
#[derive(Parser, Debug)]
#[command(name = "wherein")]
#[command(version)]
#[command(about = "Browse the countries of the world from your terminal", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the country service root URL (e.g., a local mirror)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Start with this search text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with this region filter (Africa, Americas, Asia, Europe, Oceania)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Open the detail view of this country code (e.g., FRA) at startup
    #[arg(short, long)]
    pub country: Option<String>,
}

/// What: Determine the log level from command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Merge settings and flags into runtime options.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings loaded from `settings.conf`
/// - `preferences_path`: Theme preferences file
///
/// Output:
/// - Options where flags win over settings, which win over built-in defaults.
#[must_use]
pub fn resolve_run_options(
    args: &Args,
    settings: Settings,
    preferences_path: Option<std::path::PathBuf>,
) -> RunOptions {
    let mut options = RunOptions::from_settings(settings, preferences_path);
    if let Some(url) = args.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        options.api_base_url = url.trim_end_matches('/').to_string();
    }
    options.search.clone_from(&args.search);
    options.region.clone_from(&args.region);
    options.country.clone_from(&args.country);
    options
}
