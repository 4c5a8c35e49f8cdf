//! KeyBinding struct for mapping keys to actions
//!
//! Provides parsing of key strings like "ctrl+c", "shift+backtab", "f1"

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+n", "shift+backtab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event.
    ///
    /// Terminals report symbols such as `?` with SHIFT set, so SHIFT is
    /// ignored for non-alphabetic characters.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = self.parse() else {
            return false;
        };
        let modifiers = match code {
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => modifiers,
        };
        parsed.code == code && parsed.modifiers == modifiers
    }

    /// Parse the key string into KeyCode and KeyModifiers
    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Ctrl+C")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    let parts: Vec<&str> = key.split('+').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = "";

    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if i == parts.len() - 1 {
            key_part = part;
        } else {
            match part {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "option" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "super" | "meta" | "cmd" | "command" => modifiers |= KeyModifiers::SUPER,
                _ => return Err(format!("Unknown modifier: {}", part)),
            }
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key {
        "up" | "arrow_up" => KeyCode::Up,
        "down" | "arrow_down" => KeyCode::Down,
        "left" | "arrow_left" => KeyCode::Left,
        "right" | "arrow_right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..]
                .parse()
                .map_err(|_| format!("Unknown key: {}", f))?;
            if !(1..=12).contains(&n) {
                return Err(format!("Unknown key: {}", f));
            }
            KeyCode::F(n)
        }
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+n" -> "Ctrl+N")
pub fn format_key_display(key: &str) -> String {
    let parts: Vec<String> = key.split('+').map(|p| p.trim().to_lowercase()).collect();
    let has_shift = parts.iter().any(|p| p == "shift");

    let formatted: Vec<String> = parts
        .iter()
        .map(|part| match part.as_str() {
            "ctrl" | "control" => "Ctrl".to_string(),
            "alt" | "option" => "Alt".to_string(),
            "shift" => "Shift".to_string(),
            "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
            "up" | "arrow_up" => "↑".to_string(),
            "down" | "arrow_down" => "↓".to_string(),
            "left" | "arrow_left" => "←".to_string(),
            "right" | "arrow_right" => "→".to_string(),
            "enter" | "return" => "Enter".to_string(),
            "esc" | "escape" => "Esc".to_string(),
            "space" => "Space".to_string(),
            "tab" => "Tab".to_string(),
            "backtab" if has_shift => "Tab".to_string(),
            "backtab" => "Shift+Tab".to_string(),
            "backspace" | "bs" => "Backspace".to_string(),
            "delete" | "del" => "Del".to_string(),
            "home" => "Home".to_string(),
            "end" => "End".to_string(),
            p if p.chars().count() == 1 => p.to_uppercase(),
            p if p.starts_with('f') && p.len() <= 3 => p.to_uppercase(),
            p => p.to_string(),
        })
        .collect();

    formatted.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let parsed = parse_key_string("j").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('j'));
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let parsed = parse_key_string("ctrl+c").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('c'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_shift_backtab() {
        let parsed = parse_key_string("shift+backtab").unwrap();
        assert_eq!(parsed.code, KeyCode::BackTab);
        assert_eq!(parsed.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("tab").unwrap().code, KeyCode::Tab);
        assert_eq!(
            parse_key_string("backspace").unwrap().code,
            KeyCode::Backspace
        );
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!(parse_key_string("f1").unwrap().code, KeyCode::F(1));
        assert_eq!(parse_key_string("f12").unwrap().code, KeyCode::F(12));
        assert!(parse_key_string("f13").is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("nonsense").is_err());
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+c"), "Ctrl+C");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("shift+backtab"), "Shift+Tab");
        assert_eq!(format_key_display("backtab"), "Shift+Tab");
        assert_eq!(format_key_display("f1"), "F1");
    }

    #[test]
    fn test_key_binding_matches() {
        let binding = KeyBinding::new("ctrl+c", Action::Quit);
        assert!(binding.matches(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('x'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_symbol_binding_ignores_shift() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
    }

    #[test]
    fn test_invalid_binding_never_matches() {
        let binding = KeyBinding::new("hyper+q", Action::Quit);
        assert!(!binding.matches(KeyCode::Char('q'), KeyModifiers::NONE));
    }

    #[test]
    fn test_key_binding_description() {
        let binding = KeyBinding::new("tab", Action::NextTab);
        assert_eq!(binding.get_description(), "Próximo campo");
    }
}
