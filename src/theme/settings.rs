use std::fs;
use std::path::Path;
use std::time::Duration;

use super::config::ensure_settings_file;
use super::parsing::{parse_key_chord, parse_kv_line};
use super::paths::settings_path;
use super::types::Settings;

/// What: Parse settings text on top of the defaults.
///
/// Inputs:
/// - `content`: Text of a `settings.conf` file
///
/// Output:
/// - `Settings` with every recognized, valid key applied.
///
/// Details:
/// - Unknown keys are ignored; invalid values keep the default and are logged.
/// - A keybind line replaces all default chords of that action.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let Some((key, val)) = parse_kv_line(line) else {
            continue;
        };
        match key.as_str() {
            "api_base_url" | "api_url" => {
                if val.starts_with("http://") || val.starts_with("https://") {
                    out.api_base_url = val.trim_end_matches('/').to_string();
                } else {
                    tracing::warn!(value = val, "ignoring api_base_url without http(s) scheme");
                }
            }
            "connect_timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => out.connect_timeout = Duration::from_secs(v),
                _ => tracing::warn!(value = val, "ignoring invalid connect_timeout_secs"),
            },
            "keybind_exit" | "keybind_quit" => {
                if let Some(ch) = parse_key_chord(val) {
                    out.keymap.exit = vec![ch];
                }
            }
            "keybind_toggle_theme" | "keybind_theme" => {
                if let Some(ch) = parse_key_chord(val) {
                    out.keymap.toggle_theme = vec![ch];
                }
            }
            "keybind_region_next" => {
                if let Some(ch) = parse_key_chord(val) {
                    out.keymap.region_next = vec![ch];
                }
            }
            "keybind_region_prev" => {
                if let Some(ch) = parse_key_chord(val) {
                    out.keymap.region_prev = vec![ch];
                }
            }
            _ => {}
        }
    }
    out
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
#[must_use]
pub fn load_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "settings unreadable; using defaults"
            );
            Settings::default()
        }
    }
}

/// Load user settings from `<config_dir>/settings.conf`, writing the
/// commented skeleton first if the file does not exist.
#[must_use]
pub fn settings() -> Settings {
    let path = settings_path();
    ensure_settings_file(&path);
    load_settings(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    /// What: The shipped skeleton parses back to the defaults.
    ///
    /// - Input: `SETTINGS_SKELETON_CONTENT`
    /// - Output: Equal to `Settings::default()`
    fn settings_skeleton_matches_defaults() {
        let parsed = parse_settings(super::super::config::SETTINGS_SKELETON_CONTENT);
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    /// What: Recognized keys override defaults; invalid values are ignored.
    ///
    /// - Input: Custom URL, timeout, exit chord; bad timeout; bad URL; unknown key
    /// - Output: Overrides applied where valid, defaults elsewhere
    fn settings_overrides_and_invalid_values() {
        let s = parse_settings(
            "api_base_url = http://localhost:8080/v3.1/\n\
             connect_timeout_secs = 4\n\
             keybind_exit = Ctrl+Q\n\
             unknown_key = whatever\n",
        );
        assert_eq!(s.api_base_url, "http://localhost:8080/v3.1");
        assert_eq!(s.connect_timeout, Duration::from_secs(4));
        assert_eq!(s.keymap.exit.len(), 1);
        assert_eq!(s.keymap.exit[0].code, KeyCode::Char('q'));
        assert_eq!(s.keymap.exit[0].mods, KeyModifiers::CONTROL);

        let bad = parse_settings("connect_timeout_secs = soon\napi_base_url = ftp://x\n");
        assert_eq!(bad, Settings::default());
    }

    #[test]
    /// What: Missing files fall back to defaults.
    ///
    /// - Input: Path in an empty temp directory
    /// - Output: `Settings::default()`
    fn settings_missing_file_defaults() {
        let tmp = tempfile::tempdir().expect("tempdir");
        assert_eq!(
            load_settings(&tmp.path().join("absent.conf")),
            Settings::default()
        );
    }
}
