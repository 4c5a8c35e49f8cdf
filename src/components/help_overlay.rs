//! Help Overlay Component
//!
//! Displays current keybindings when the user presses the help key.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use indoc::indoc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const USAGE: &str = indoc! {"
    Tab alterna entre campos e botões; Enter envia o formulário
    ou pressiona o botão em foco.
    Login de demonstração: aceito quando a senha é igual ao usuário.
"};

const CLOSE_HINT: &str = "Pressione qualquer tecla para fechar";

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of `area`
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 80, 85);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Atalhos - {} ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Usage
                Constraint::Min(3),    // Bindings
                Constraint::Length(1), // Footer
            ])
            .split(inner_area);

        frame.render_widget(
            Paragraph::new(USAGE)
                .style(t.text_style())
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(binding_lines(keymap)).wrap(Wrap { trim: false }),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(CLOSE_HINT)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[2],
        );

        Ok(())
    }
}

/// Bindings grouped under their category headings.
fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
    let t = theme();
    let mut bindings = keymap.all_bindings();
    // Stable sort keeps preset order within a category
    bindings.sort_by_key(|b| b.action.category());

    let mut lines = Vec::new();
    let mut current_category = "";
    for binding in &bindings {
        let category = binding.action.category();
        if category != current_category {
            if !current_category.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", category),
                t.title_style().add_modifier(Modifier::UNDERLINED),
            )));
            current_category = category;
        }

        lines.push(Line::from(vec![
            Span::styled(format!("    {:14}", binding.display()), t.emphasis_style()),
            Span::styled(binding.get_description().to_string(), t.text_style()),
        ]));
    }
    lines
}
