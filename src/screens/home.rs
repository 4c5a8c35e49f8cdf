//! Home screen: a welcome line, two sport cards and a sign-out button.

use crate::components::Scaffold;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::Screen as ScreenId;
use crate::utils::center_rect;
use crate::widgets::{Button, Card, CARD_HEIGHT, CARD_WIDTH};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::info;

pub const WELCOME: &str = "Bem-vindo à Tela Principal";
pub const CARDS: [&str; 2] = ["Tênis", "Futebol"];
pub const SIGN_OUT_LABEL: &str = "Sair";

#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn sign_out(&self) -> ScreenAction {
        info!("Signed out");
        ScreenAction::Navigate(ScreenId::Login)
    }
}

impl Screen for HomeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Home
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let body = Scaffold::render(
            frame,
            area,
            ScreenId::Home.title(),
            &ctx.config.keymap.footer_navigation(),
        )?;

        let height = 2 + (CARD_HEIGHT + 1) * CARDS.len() as u16 + 1;
        let column = center_rect(body, CARD_WIDTH.max(WELCOME.chars().count() as u16), height);

        let mut constraints = vec![Constraint::Length(2)];
        for _ in CARDS {
            constraints.push(Constraint::Length(CARD_HEIGHT));
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(column);

        frame.render_widget(
            Paragraph::new(WELCOME)
                .style(t.title_style())
                .alignment(Alignment::Center),
            rows[0],
        );

        for (i, text) in CARDS.iter().enumerate() {
            let card_area = center_rect(rows[1 + i * 2], CARD_WIDTH, CARD_HEIGHT);
            frame.render_widget(Card::new(text), card_area);
        }

        // The only focusable element, so it is always highlighted
        frame.render_widget(
            Button::new(SIGN_OUT_LABEL).focused(true),
            rows[1 + CARDS.len() * 2],
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let action = match ctx.config.keymap.get_action(key.code, key.modifiers) {
            Some(Action::Confirm) => self.sign_out(),
            Some(Action::Quit) => ScreenAction::Quit,
            Some(Action::Help) => ScreenAction::ShowHelp,
            _ => ScreenAction::None,
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        HomeScreen::new()
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    #[test]
    fn test_sign_out_navigates_to_login() {
        assert_eq!(
            HomeScreen::new().sign_out(),
            ScreenAction::Navigate(ScreenId::Login)
        );
    }

    #[test]
    fn test_enter_signs_out() {
        assert_eq!(press(KeyCode::Enter), ScreenAction::Navigate(ScreenId::Login));
    }

    #[test]
    fn test_q_quits_and_question_mark_opens_help() {
        assert_eq!(press(KeyCode::Char('q')), ScreenAction::Quit);
        assert_eq!(press(KeyCode::Char('?')), ScreenAction::ShowHelp);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(press(KeyCode::Char('x')), ScreenAction::None);
        assert_eq!(press(KeyCode::Tab), ScreenAction::None);
    }
}
