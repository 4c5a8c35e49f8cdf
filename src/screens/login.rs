//! Login screen controller.
//!
//! Two fields, a submit button ("Entrar") and a link to registration
//! ("Cadastrar"). A failed comparison keeps the user here with an inline
//! error; the typed values are left untouched.

use crate::auth::Credentials;
use crate::components::Scaffold;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::{LoginField, LoginState, Screen as ScreenId};
use crate::utils::{center_rect, form_column_width};
use crate::widgets::{Button, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info, warn};

pub const USERNAME_LABEL: &str = "Nome de usuário";
pub const PASSWORD_LABEL: &str = "Senha";
pub const SIGN_IN_LABEL: &str = "Entrar";
pub const SIGN_UP_LABEL: &str = "Cadastrar";

/// Login screen controller.
#[derive(Debug, Default)]
pub struct LoginScreen {
    state: LoginState,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Current inline error, if the last submit failed.
    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message.as_deref()
    }

    /// Compare the two fields and move to Home when they match.
    ///
    /// On mismatch the error message is set and the fields are kept.
    pub fn submit(&mut self) -> ScreenAction {
        let credentials = Credentials::new(
            self.state.username_input.text(),
            self.state.password_input.text(),
        );
        match credentials.verify() {
            Ok(()) => {
                info!("Login accepted");
                self.state.error_message = None;
                ScreenAction::Navigate(ScreenId::Home)
            }
            Err(e) => {
                warn!("Login rejected: {}", e);
                self.state.error_message = Some(e.to_string());
                ScreenAction::None
            }
        }
    }

    /// Leave for the registration screen.
    pub fn go_to_registration(&self) -> ScreenAction {
        ScreenAction::Navigate(ScreenId::Registration)
    }

    fn focus(&mut self, field: LoginField) {
        debug!("Login focus: {:?} -> {:?}", self.state.focused_field, field);
        self.state.focused_field = field;
    }

    /// Press whatever has focus; Enter inside a field submits the form.
    fn activate(&mut self) -> ScreenAction {
        match self.state.focused_field {
            LoginField::SignUp => self.go_to_registration(),
            LoginField::Username | LoginField::Password | LoginField::SignIn => self.submit(),
        }
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
            Action::Confirm => self.activate(),
            Action::NextTab | Action::MoveDown => {
                self.focus(self.state.focused_field.next());
                ScreenAction::None
            }
            Action::PrevTab | Action::MoveUp => {
                self.focus(self.state.focused_field.prev());
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

impl Screen for LoginScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Login
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let body = Scaffold::render(
            frame,
            area,
            ScreenId::Login.title(),
            &ctx.config.keymap.footer_form(),
        )?;

        let column = center_rect(body, form_column_width(body.width), 15);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1),
                Constraint::Length(3), // Username
                Constraint::Length(3), // Password
                Constraint::Length(1),
                Constraint::Length(1), // Entrar
                Constraint::Length(1),
                Constraint::Length(1), // Cadastrar
                Constraint::Length(1),
                Constraint::Length(1), // Error
                Constraint::Min(0),
            ])
            .split(column);

        frame.render_widget(
            Paragraph::new(ScreenId::Login.title())
                .style(t.title_style())
                .alignment(Alignment::Center),
            rows[0],
        );

        let focused = self.state.focused_field;
        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.username_input)
                .title(USERNAME_LABEL)
                .focused(focused == LoginField::Username),
            rows[2],
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.password_input)
                .title(PASSWORD_LABEL)
                .masked(ctx.config.mask_passwords)
                .focused(focused == LoginField::Password),
            rows[3],
        );

        frame.render_widget(
            Button::new(SIGN_IN_LABEL).focused(focused == LoginField::SignIn),
            rows[5],
        );
        frame.render_widget(
            Button::new(SIGN_UP_LABEL).focused(focused == LoginField::SignUp),
            rows[7],
        );

        if let Some(error) = &self.state.error_message {
            frame.render_widget(
                Paragraph::new(error.as_str())
                    .style(t.error_style())
                    .alignment(Alignment::Center),
                rows[9],
            );
        }

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
