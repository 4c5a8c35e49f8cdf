use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Top app bar shared by all screens
pub struct Header;

impl Header {
    /// Height of the app bar, in rows
    pub const HEIGHT: u16 = 3;

    /// Render the app bar with the screen title
    ///
    /// # Returns
    /// The height used
    pub fn render(frame: &mut Frame, area: Rect, title: &str) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());

        let bar = Paragraph::new(Line::from(Span::styled(title, t.title_style())))
            .alignment(Alignment::Left)
            .block(block.padding(ratatui::widgets::Padding::horizontal(1)));

        frame.render_widget(bar, area);
        Ok(Self::HEIGHT)
    }
}
