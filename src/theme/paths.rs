use std::env;
use std::path::PathBuf;

/// Environment override for the configuration directory (used by tests and packaging).
pub const CONFIG_DIR_ENV: &str = "WHEREIN_CONFIG_DIR";

/// What: Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Configuration directory for Wherein (ensured to exist).
///
/// Resolution order: `$WHEREIN_CONFIG_DIR`, `$XDG_CONFIG_HOME/wherein`,
/// `$HOME/.config/wherein`.
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = match env::var(CONFIG_DIR_ENV) {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("wherein"),
    };
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of the settings file.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Path of the persisted user preferences (theme).
#[must_use]
pub fn preferences_path() -> PathBuf {
    config_dir().join("preferences.conf")
}
