//! Button widget: a filled, single-line control with a centered label.
//!
//! Focus is shown with a `▶ label ◀` marker so it stays visible without colors.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// A pressable control rendered as a filled bar.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn face(&self) -> String {
        if self.focused {
            format!("▶ {} ◀", self.label)
        } else {
            self.label.to_string()
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = theme().button_style(self.focused);
        buf.set_style(area, style);

        // Label sits on the middle row of the button
        let label_row = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
        Paragraph::new(self.face())
            .style(style)
            .alignment(Alignment::Center)
            .render(label_row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_label_is_centered() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        Button::new("Sair").render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "    Sair    ");
    }

    #[test]
    fn test_focus_marker() {
        let area = Rect::new(0, 0, 16, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Entrar").focused(true).render(area, &mut buf);
        assert!(row_text(&buf, 1).contains("▶ Entrar ◀"));
        assert!(row_text(&buf, 0).trim().is_empty());
    }
}
