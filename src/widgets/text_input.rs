//! Text input widget for rendering TextInput instances.
//!
//! Renders a labeled, bordered field with optional password masking, and places the terminal cursor when focused.

use crate::styles::theme;
use crate::utils::TextInput;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Character drawn in place of each masked character.
pub const MASK_CHAR: char = '•';

/// A widget for rendering TextInput with consistent styling.
///
/// # Example
/// ```
/// use navegacao::utils::TextInput;
/// use navegacao::widgets::TextInputWidget;
///
/// let mut input = TextInput::new();
/// input.set_text("segredo");
/// let widget = TextInputWidget::new(&input)
///     .title("Senha")
///     .masked(true)
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    focused: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            focused: false,
            masked: false,
        }
    }

    /// Set the label drawn in the top border.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether to mask the text (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Get the display text (actual or masked).
    fn display_text(&self) -> String {
        if self.masked {
            MASK_CHAR.to_string().repeat(self.input.char_count())
        } else {
            self.input.text().to_string()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let t = theme();
        let border_style = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Cursor cell inside `area` when focused.
    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = self.create_block().inner(area);
        let cursor = self.input.cursor().min(self.input.char_count());
        let x = inner.x + (cursor as u16).min(inner.width.saturating_sub(1));
        Some(Position::new(x, inner.y))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.display_text())
            .style(theme().text_style())
            .block(self.create_block())
            .render(area, buf);
    }
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
///
/// The Widget trait has no access to the Frame, so cursor placement lives here.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
