use crossterm::event::{KeyCode, KeyModifiers};

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "?", "r") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Supports function keys, navigation keys, and single printable characters.
/// - Normalizes character keys to lowercase for consistent matching.
pub fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t.strip_prefix('F').and_then(|x| x.parse::<u8>().ok()) {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a full key chord such as "Ctrl+T" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `text`: Modifiers and a key token joined by `+`.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` on an unknown key token.
///
/// Details:
/// - Recognizes Ctrl/Alt/Shift/Super modifiers in any case.
/// - Normalizes `Shift+Tab` to `BackTab` with modifiers cleared.
pub fn parse_key_chord(text: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<String> = None;
    for part in text.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            "SUPER" | "META" | "WIN" => mods |= KeyModifiers::SUPER,
            _ => key_part = Some(p.to_string()),
        }
    }
    if key_part
        .as_deref()
        .is_some_and(|k| k.eq_ignore_ascii_case("TAB"))
        && mods.contains(KeyModifiers::SHIFT)
    {
        return Some(KeyChord::new(KeyCode::BackTab, KeyModifiers::empty()));
    }
    let code = parse_key_identifier(key_part.as_deref().unwrap_or(""))?;
    Some(KeyChord::new(code, mods))
}

/// What: Strip trailing `//` or `#` comments from a config value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - Trimmed value without the comment. A leading `#` is kept as part of the value.
pub fn strip_inline_comment(mut s: &str) -> &str {
    // Require whitespace before `//` so URL schemes such as `https://` survive.
    if let Some(i) = s.find(" //") {
        s = &s[..i];
    }
    let hash = s
        .strip_prefix('#')
        .map_or_else(|| s.find(" #"), |stripped| stripped.find('#').map(|j| j + 1));
    if let Some(i_rel) = hash {
        s = &s[..i_rel];
    }
    s.trim()
}

/// What: Split a config line into a normalized key and its value.
///
/// Inputs:
/// - `line`: One line of a `key = value` file
///
/// Output:
/// - `Some((key, value))` with the key lowercased and `.`/`-`/space mapped to `_`;
///   `None` for blanks, comments and lines without `=`.
pub fn parse_kv_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_val.trim())))
}
