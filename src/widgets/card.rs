//! Card widget: a rounded, filled surface holding a short fixed label.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Fixed card size, in terminal cells.
pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone)]
pub struct Card<'a> {
    text: &'a str,
}

impl<'a> Card<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .style(t.card_style())
            .padding(Padding::new(1, 1, 1, 0));

        Paragraph::new(self.text)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_renders_text_inside_border() {
        let area = Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        Card::new("Futebol").render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf[(x, 2)].symbol().to_string())
            .collect();
        assert!(line.contains("Futebol"));
        assert_eq!(buf[(0, 0)].symbol(), "╭");
    }
}
