use std::fs;
use std::path::Path;

/// Commented default settings written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Wherein settings
# Lines are `key = value`. Comments start with `#` or `//`.

# Root URL of the REST Countries service.
api_base_url = https://restcountries.com/v3.1

# Seconds to wait for a connection before a request fails.
connect_timeout_secs = 15

# Key bindings (modifiers: Ctrl, Alt, Shift, Super).
keybind_exit = Ctrl+C
keybind_toggle_theme = Ctrl+T
keybind_region_next = Tab
keybind_region_prev = Shift+Tab
";

/// What: Write the settings skeleton when no settings file exists yet.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - `true` if the skeleton was written; `false` if a file already existed or writing failed.
///
/// Details:
/// - Never overwrites an existing file. Failures are logged, not returned.
pub fn ensure_settings_file(path: &Path) -> bool {
    if path.exists() {
        return false;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(path, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "wrote default settings skeleton");
            true
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to write settings skeleton");
            false
        }
    }
}
