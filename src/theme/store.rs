use std::fs;
use std::path::{Path, PathBuf};

use super::parsing::parse_kv_line;
use super::types::{Theme, ThemeMode};

/// Preference key holding the theme marker.
const THEME_KEY: &str = "theme";

/// Application-scoped theme preference.
///
/// Created once at startup with [`ThemeStore::load`] and owned by the
/// application state; rendering reads the palette through it. A store
/// without a path keeps the preference in memory only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeStore {
    /// Preferences file, if persistence is enabled.
    path: Option<PathBuf>,
    /// Current mode.
    mode: ThemeMode,
}

impl ThemeStore {
    /// What: Restore the theme preference from a preferences file.
    ///
    /// Inputs:
    /// - `path`: Preferences file (may not exist yet)
    ///
    /// Output:
    /// - Store in `Dark` mode only if the file's `theme` value is exactly `dark`;
    ///   `Light` otherwise, including when the file or key is missing.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let stored = fs::read_to_string(path).ok().and_then(|content| {
            content.lines().find_map(|line| {
                parse_kv_line(line)
                    .filter(|(k, _)| k == THEME_KEY)
                    .map(|(_, v)| v.to_string())
            })
        });
        let mode = ThemeMode::from_persisted(stored.as_deref());
        tracing::debug!(path = %path.display(), ?mode, "restored theme preference");
        Self {
            path: Some(path.to_path_buf()),
            mode,
        }
    }

    /// Store that never touches the filesystem.
    #[must_use]
    pub const fn in_memory(mode: ThemeMode) -> Self {
        Self { path: None, mode }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Palette for the current mode.
    #[must_use]
    pub const fn palette(&self) -> Theme {
        self.mode.palette()
    }

    /// What: Flip the theme and persist the new value.
    ///
    /// Output:
    /// - The new mode.
    ///
    /// Details:
    /// - Writes `theme = <mode>` to the preferences file; a write failure is
    ///   logged and the in-memory toggle still applies.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Some(path) = &self.path {
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
            }
            let content = format!("{THEME_KEY} = {}\n", self.mode.as_str());
            match fs::write(path, content) {
                Ok(()) => {
                    tracing::info!(mode = self.mode.as_str(), "theme preference saved");
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to save theme preference"
                    );
                }
            }
        }
        self.mode
    }
}
