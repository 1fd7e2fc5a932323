use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Application palette used by rendering code.
///
/// All colors are [`ratatui::style::Color`] values suitable for direct use
/// with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly offset background used behind the header and cards.
    pub mantle: Color,
    /// Subtle surface color for input fields and chips.
    pub surface1: Color,
    /// Muted border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for labels and hints.
    pub subtext0: Color,
    /// Accent used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent used for headings.
    pub mauve: Color,
    /// Attention color (loading).
    pub yellow: Color,
    /// Error color.
    pub red: Color,
}

/// Display theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light palette (default).
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Persisted marker for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// What: Interpret a persisted value.
    ///
    /// Inputs:
    /// - `value`: Stored marker, if any
    ///
    /// Output:
    /// - `Dark` only when the value is exactly `"dark"`; `Light` for anything else.
    #[must_use]
    pub fn from_persisted(value: Option<&str>) -> Self {
        if value == Some(Self::Dark.as_str()) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Palette for this mode (Catppuccin Latte / Mocha).
    #[must_use]
    pub const fn palette(self) -> Theme {
        match self {
            Self::Light => Theme {
                base: Color::Rgb(0xef, 0xf1, 0xf5),
                mantle: Color::Rgb(0xe6, 0xe9, 0xef),
                surface1: Color::Rgb(0xbc, 0xc0, 0xcc),
                overlay1: Color::Rgb(0x8c, 0x8f, 0xa1),
                text: Color::Rgb(0x4c, 0x4f, 0x69),
                subtext0: Color::Rgb(0x6c, 0x6f, 0x85),
                sapphire: Color::Rgb(0x20, 0x9f, 0xb5),
                mauve: Color::Rgb(0x88, 0x39, 0xef),
                yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
                red: Color::Rgb(0xd2, 0x0f, 0x39),
            },
            Self::Dark => Theme {
                base: Color::Rgb(0x1e, 0x1e, 0x2e),
                mantle: Color::Rgb(0x18, 0x18, 0x25),
                surface1: Color::Rgb(0x45, 0x47, 0x5a),
                overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
                text: Color::Rgb(0xcd, 0xd6, 0xf4),
                subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
                sapphire: Color::Rgb(0x74, 0xc7, 0xec),
                mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
                yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
                red: Color::Rgb(0xf3, 0x8b, 0xa8),
            },
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord for `code` with the given modifiers.
    #[must_use]
    pub const fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// `true` when a key event with `code`/`mods` triggers this chord.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        self.code == code && self.mods == mods
    }

    /// Return a short display label such as "Ctrl+T", "F1", "Shift+Tab".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Configurable key bindings. Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Quit the application.
    pub exit: Vec<KeyChord>,
    /// Flip between light and dark themes.
    pub toggle_theme: Vec<KeyChord>,
    /// Advance the region filter.
    pub region_next: Vec<KeyChord>,
    /// Step the region filter backwards.
    pub region_prev: Vec<KeyChord>,
}

impl KeyMap {
    /// What: Test a key event against one action's chords.
    ///
    /// Inputs:
    /// - `chords`: Bindings of the action
    /// - `code`/`mods`: Pressed key and modifiers
    ///
    /// Output:
    /// - `true` if any chord matches.
    #[must_use]
    pub fn hit(chords: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        chords.iter().any(|c| c.matches(code, mods))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            exit: vec![KeyChord::new(KeyCode::Char('c'), KeyModifiers::CONTROL)],
            toggle_theme: vec![KeyChord::new(KeyCode::Char('t'), KeyModifiers::CONTROL)],
            region_next: vec![KeyChord::new(KeyCode::Tab, KeyModifiers::empty())],
            region_prev: vec![KeyChord::new(KeyCode::BackTab, KeyModifiers::empty())],
        }
    }
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Root URL of the country catalog service.
    pub api_base_url: String,
    /// Connect timeout for catalog requests.
    pub connect_timeout: Duration,
    /// Key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: crate::sources::DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(15),
            keymap: KeyMap::default(),
        }
    }
}
