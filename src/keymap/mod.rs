//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    /// Note: If an action is overridden, preset bindings for that action are ignored
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help
    /// Overrides shadow preset bindings for the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|b| !self.overrides.iter().any(|o| o.action == b.action)),
        );
        bindings
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Ctrl+C")
    /// Checks overrides first, then preset.
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map_or_else(|| format!("{:?}", action), KeyBinding::display)
    }

    /// Footer hints for a form screen: field cycling, submit, quit, help.
    pub fn footer_form(&self) -> String {
        format!(
            "Próximo campo: {} | Enviar: {} | Sair: {} | Ajuda: {}",
            self.get_key_display_for_action(Action::NextTab),
            self.get_key_display_for_action(Action::Confirm),
            self.global_quit_display(),
            self.global_help_display(),
        )
    }

    /// Footer hints for a screen without text input.
    pub fn footer_navigation(&self) -> String {
        format!(
            "Selecionar: {} | Sair: {} | Ajuda: {}",
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Quit),
            self.get_key_display_for_action(Action::Help),
        )
    }

    /// Quit key that still works while a text field has focus.
    fn global_quit_display(&self) -> String {
        self.display_for_non_char(Action::Quit)
    }

    /// Help key that still works while a text field has focus.
    fn global_help_display(&self) -> String {
        self.display_for_non_char(Action::Help)
    }

    fn display_for_non_char(&self, action: Action) -> String {
        let bindings = self.all_bindings();
        bindings
            .iter()
            .filter(|b| b.action == action)
            .find(|b| {
                b.parse().is_ok_and(|p| {
                    !matches!(p.code, KeyCode::Char(_))
                        || p.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                })
            })
            .map_or_else(
                || self.get_key_display_for_action(action),
                KeyBinding::display,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        let action = keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Quit));
        let action = keymap.get_action(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(action, Some(Action::NextTab));
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("ctrl+s", Action::Confirm)],
        };
        let action = keymap.get_action(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(action, Some(Action::Confirm));
        // Enter is shadowed by the override
        assert_eq!(keymap.get_action(KeyCode::Enter, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        let action = keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::MoveDown));
    }

    #[test]
    fn test_footer_form_uses_non_char_keys() {
        let keymap = Keymap::default();
        let footer = keymap.footer_form();
        assert!(footer.contains("Sair: Ctrl+C"));
        assert!(footer.contains("Ajuda: F1"));
        assert!(footer.contains("Próximo campo: Tab"));
    }

    #[test]
    fn test_footer_navigation() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.footer_navigation(),
            "Selecionar: Enter | Sair: Q | Ajuda: ?"
        );
    }
}
