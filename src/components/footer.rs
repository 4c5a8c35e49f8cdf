use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Height of the footer, in rows (1 for border, 1 for text)
    pub const HEIGHT: u16 = 2;

    /// Render a footer with the given text
    ///
    /// Text is a `" | "` separated list of `label: keys` hints.
    ///
    /// # Returns
    /// The height used
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_focused_style())
            .border_type(BorderType::Rounded);

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(hint_line(text)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(Self::HEIGHT)
    }
}

/// Color the key half of each `label: keys` hint.
fn hint_line(text: &str) -> Line<'_> {
    let t = theme();
    let mut spans = Vec::new();

    for (i, part) in text.split(" | ").enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", t.muted_style()));
        }
        if let Some((label, keys)) = part.split_once(": ") {
            spans.push(Span::styled(format!("{}: ", label), t.text_style()));
            spans.push(Span::styled(keys, t.emphasis_style()));
        } else {
            spans.push(Span::styled(part, t.text_style()));
        }
    }

    Line::from(spans)
}
