//! Theme, settings and configuration paths for Wherein.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Settings skeleton management.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Persisted theme preference.
mod store;
/// Theme and settings type definitions.
mod types;

pub use paths::{CONFIG_DIR_ENV, config_dir, logs_dir, preferences_path, settings_path};
pub use settings::{load_settings, parse_settings, settings};
pub use store::ThemeStore;
pub use types::{KeyChord, KeyMap, Settings, Theme, ThemeMode};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize env-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
