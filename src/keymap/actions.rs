//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Focus navigation ============
    /// Focus the previous element
    MoveUp,
    /// Focus the next element
    MoveDown,
    /// Move the cursor left
    MoveLeft,
    /// Move the cursor right
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Confirmation ============
    /// Submit form / press focused button (Enter)
    Confirm,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Toggle the help overlay
    Help,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Field navigation ============
    /// Move to next field
    NextTab,
    /// Move to previous field
    PrevTab,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Elemento anterior",
            Action::MoveDown => "Próximo elemento",
            Action::MoveLeft => "Cursor à esquerda",
            Action::MoveRight => "Cursor à direita",
            Action::Home => "Início do campo",
            Action::End => "Fim do campo",
            Action::Confirm => "Enviar / pressionar botão",
            Action::Quit => "Sair",
            Action::Help => "Mostrar ajuda",
            Action::Backspace => "Apagar anterior",
            Action::DeleteChar => "Apagar caractere",
            Action::NextTab => "Próximo campo",
            Action::PrevTab => "Campo anterior",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navegação",

            Action::Confirm => "Seleção",

            Action::Quit | Action::Help => "Geral",

            Action::Backspace | Action::DeleteChar => "Edição de texto",

            Action::NextTab | Action::PrevTab => "Campos",
        }
    }

    /// Whether this action edits or moves within a text field.
    pub fn is_text_editing(&self) -> bool {
        matches!(
            self,
            Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}
