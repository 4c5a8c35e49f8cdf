use crate::keymap::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A text input field with encapsulated state.
///
/// Wraps the text and a cursor position counted in characters, not bytes.
///
/// # Example
/// ```
/// use navegacao::utils::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('o');
/// input.insert_char('i');
/// assert_eq!(input.text(), "oi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the field.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the text and move cursor to end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        handle_char_insertion(&mut self.text, &mut self.cursor, c);
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        handle_backspace(&mut self.text, &mut self.cursor);
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        handle_delete(&mut self.text, &mut self.cursor);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Handle an editing action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Handle a key event that carries typed text.
    ///
    /// Returns true if the key was consumed as text.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let (true, KeyCode::Char(c)) = (Self::captures_key(key), key.code) {
            self.insert_char(c);
            return true;
        }
        false
    }

    /// Whether a focused text input claims this key as typed text.
    ///
    /// Printable characters without Ctrl/Alt are text, even when the keymap
    /// binds them (e.g. `q` for quit), so they never trigger actions while a
    /// field is focused.
    pub fn captures_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char(c) if !c.is_control())
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }
}

/// Handle text input for a single character insertion
///
/// # Arguments
/// * `text` - Mutable reference to the text string
/// * `cursor_pos` - Mutable reference to cursor position
/// * `c` - Character to insert
pub fn handle_char_insertion(text: &mut String, cursor_pos: &mut usize, c: char) {
    if c.is_control() {
        return;
    }
    let byte_index = text
        .char_indices()
        .map(|(i, _)| i)
        .nth(*cursor_pos)
        .unwrap_or(text.len());
    text.insert(byte_index, c);
    *cursor_pos = (*cursor_pos + 1).min(text.chars().count());
}

/// Handle character deletion (backspace)
pub fn handle_backspace(text: &mut String, cursor_pos: &mut usize) {
    if *cursor_pos > 0 {
        let before_cursor = text.chars().take(*cursor_pos - 1);
        let after_cursor = text.chars().skip(*cursor_pos);
        *text = before_cursor.chain(after_cursor).collect();
        *cursor_pos -= 1;
    }
}

/// Handle character deletion (delete key)
pub fn handle_delete(text: &mut String, cursor_pos: &mut usize) {
    let char_count = text.chars().count();
    if *cursor_pos < char_count {
        let before_cursor = text.chars().take(*cursor_pos);
        let after_cursor = text.chars().skip(*cursor_pos + 1);
        *text = before_cursor.chain(after_cursor).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_insertion() {
        let mut text = String::from("senha");
        let mut cursor = 2;

        handle_char_insertion(&mut text, &mut cursor, 'x');
        assert_eq!(text, "sexnha");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_char_insertion_non_ascii() {
        let mut text = String::from("Tnis");
        let mut cursor = 1;

        handle_char_insertion(&mut text, &mut cursor, 'ê');
        assert_eq!(text, "Tênis");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_control_char_rejected() {
        let mut text = String::from("abc");
        let mut cursor = 3;

        handle_char_insertion(&mut text, &mut cursor, '\u{7}');
        assert_eq!(text, "abc");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_backspace() {
        let mut text = String::from("hello");
        let mut cursor = 3;

        handle_backspace(&mut text, &mut cursor);
        assert_eq!(text, "helo");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut text = String::from("hello");
        let mut cursor = 0;

        handle_backspace(&mut text, &mut cursor);
        assert_eq!(text, "hello");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_delete_at_end() {
        let mut text = String::from("hello");
        let mut cursor = 5;

        handle_delete(&mut text, &mut cursor);
        assert_eq!(text, "hello");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn test_text_input_with_text() {
        let input = TextInput::with_text("usuário");
        assert_eq!(input.text(), "usuário");
        assert_eq!(input.cursor(), 7);
        assert!(!input.is_empty());
    }

    #[test]
    fn test_whitespace_is_content() {
        let input = TextInput::with_text("   ");
        assert!(!input.is_empty());
        assert_eq!(input.char_count(), 3);
    }

    #[test]
    fn test_text_input_cursor_movement() {
        let mut input = TextInput::with_text("hello");

        input.move_home();
        assert_eq!(input.cursor(), 0);
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_right();
        assert_eq!(input.cursor(), 1);
        input.move_end();
        assert_eq!(input.cursor(), 5);
        input.move_right();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_text_input_handle_action() {
        let mut input = TextInput::with_text("hello");

        assert!(input.handle_action(Action::Home));
        assert!(input.handle_action(Action::MoveRight));
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "hllo");
        assert!(!input.handle_action(Action::Confirm));
    }

    #[test]
    fn test_handle_key_inserts_plain_chars() {
        let mut input = TextInput::new();
        assert!(input.handle_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(input.handle_key(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)));
        assert_eq!(input.text(), "qA");
    }

    #[test]
    fn test_handle_key_ignores_control_combos() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!input.handle_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(input.is_empty());
    }
}
