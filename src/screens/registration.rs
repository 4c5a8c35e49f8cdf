//! Registration screen controller.
//!
//! Collects a username and a password and returns to Login on submit.
//! Nothing is stored or validated.

use crate::components::Scaffold;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::{RegistrationField, RegistrationState, Screen as ScreenId};
use crate::utils::{center_rect, form_column_width};
use crate::widgets::{Button, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info};

pub const HEADING: &str = "Cadastro";
pub const USERNAME_LABEL: &str = "Nome do Usuário";
pub const PASSWORD_LABEL: &str = "Senha";
pub const REGISTER_LABEL: &str = "Registrar";

#[derive(Debug, Default)]
pub struct RegistrationScreen {
    state: RegistrationState,
}

impl RegistrationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    /// Finish registration. Field contents are discarded.
    pub fn submit(&mut self) -> ScreenAction {
        info!("Registration submitted");
        ScreenAction::Navigate(ScreenId::Login)
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        if let Some(input) = self.state.focused_input_mut() {
            if input.handle_key(&key) {
                return ScreenAction::None;
            }
        }

        let Some(action) = ctx.config.keymap.get_action(key.code, key.modifiers) else {
            return ScreenAction::None;
        };

        match action {
            Action::Confirm => self.submit(),
            Action::NextTab | Action::MoveDown => {
                self.state.focused_field = self.state.focused_field.next();
                debug!("Registration focus: {:?}", self.state.focused_field);
                ScreenAction::None
            }
            Action::PrevTab | Action::MoveUp => {
                self.state.focused_field = self.state.focused_field.prev();
                debug!("Registration focus: {:?}", self.state.focused_field);
                ScreenAction::None
            }
            Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            edit if edit.is_text_editing() => {
                if let Some(input) = self.state.focused_input_mut() {
                    input.handle_action(edit);
                }
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }
}

impl Screen for RegistrationScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Registration
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let body = Scaffold::render(
            frame,
            area,
            ScreenId::Registration.title(),
            &ctx.config.keymap.footer_form(),
        )?;

        let column = center_rect(body, form_column_width(body.width), 11);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(1),
                Constraint::Length(3), // Username
                Constraint::Length(3), // Password
                Constraint::Length(1),
                Constraint::Length(1), // Registrar
                Constraint::Min(0),
            ])
            .split(column);

        frame.render_widget(
            Paragraph::new(HEADING)
                .style(t.title_style())
                .alignment(Alignment::Center),
            rows[0],
        );

        let focused = self.state.focused_field;
        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.username_input)
                .title(USERNAME_LABEL)
                .focused(focused == RegistrationField::Username),
            rows[2],
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.password_input)
                .title(PASSWORD_LABEL)
                .masked(ctx.config.mask_passwords)
                .focused(focused == RegistrationField::Password),
            rows[3],
        );
        frame.render_widget(
            Button::new(REGISTER_LABEL).focused(focused == RegistrationField::Register),
            rows[5],
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key, ctx)),
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        self.state.focused_field.is_text()
    }
}
