//! Wherein binary entrypoint kept minimal. The full runtime lives in `wherein::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use wherein::{app, args, theme};

/// Log timestamp format: local time with milliseconds.
struct WhereinTimer;

impl tracing_subscriber::fmt::time::FormatTime for WhereinTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f")
        )
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config_dir>/logs/wherein.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is not set
fn init_logging(level: &str) {
    let make_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("wherein.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(make_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(WhereinTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(make_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(WhereinTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = theme::settings();
    let options = args::resolve_run_options(&cli, settings, Some(theme::preferences_path()));
    tracing::info!(
        api = %options.api_base_url,
        search = ?options.search,
        region = ?options.region,
        country = ?options.country,
        "Wherein starting"
    );
    if let Err(err) = app::run(options).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("wherein: {err}");
    }
    tracing::info!("Wherein exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives an ISO-like timestamp
    #[test]
    fn wherein_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let _ = super::WhereinTimer.format_time(&mut writer);
        assert!(buf.contains('T'));
        assert!(buf.len() >= 19);
    }
}
