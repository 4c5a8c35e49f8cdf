use crate::utils::TextInput;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Registration,
    Home,
}

impl Screen {
    /// Title shown in the app bar
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Registration => "Cadastro",
            Screen::Home => "Tela Principal",
        }
    }
}

/// Focusable elements of the login screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    SignIn,
    SignUp,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::SignIn,
            LoginField::SignIn => LoginField::SignUp,
            LoginField::SignUp => LoginField::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Username => LoginField::SignUp,
            LoginField::Password => LoginField::Username,
            LoginField::SignIn => LoginField::Password,
            LoginField::SignUp => LoginField::SignIn,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, LoginField::Username | LoginField::Password)
    }
}

/// Login screen state
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username_input: TextInput,
    pub password_input: TextInput,
    pub focused_field: LoginField,
    /// Set when the last submit failed
    pub error_message: Option<String>,
}

impl LoginState {
    /// The text input under focus, if the focus is on a field
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            LoginField::Username => Some(&mut self.username_input),
            LoginField::Password => Some(&mut self.password_input),
            LoginField::SignIn | LoginField::SignUp => None,
        }
    }
}

/// Focusable elements of the registration screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationField {
    #[default]
    Username,
    Password,
    Register,
}

impl RegistrationField {
    pub fn next(self) -> Self {
        match self {
            RegistrationField::Username => RegistrationField::Password,
            RegistrationField::Password => RegistrationField::Register,
            RegistrationField::Register => RegistrationField::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RegistrationField::Username => RegistrationField::Register,
            RegistrationField::Password => RegistrationField::Username,
            RegistrationField::Register => RegistrationField::Password,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            RegistrationField::Username | RegistrationField::Password
        )
    }
}

/// Registration screen state
///
/// Entered values are never read back; submitting only navigates.
#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    pub username_input: TextInput,
    pub password_input: TextInput,
    pub focused_field: RegistrationField,
}

impl RegistrationState {
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            RegistrationField::Username => Some(&mut self.username_input),
            RegistrationField::Password => Some(&mut self.password_input),
            RegistrationField::Register => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_tab_order_cycles() {
        let mut field = LoginField::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(field);
            field = field.next();
        }
        assert_eq!(field, LoginField::Username);
        assert_eq!(
            seen,
            vec![
                LoginField::Username,
                LoginField::Password,
                LoginField::SignIn,
                LoginField::SignUp
            ]
        );
    }

    #[test]
    fn test_prev_inverts_next() {
        for field in [
            LoginField::Username,
            LoginField::Password,
            LoginField::SignIn,
            LoginField::SignUp,
        ] {
            assert_eq!(field.next().prev(), field);
        }
        for field in [
            RegistrationField::Username,
            RegistrationField::Password,
            RegistrationField::Register,
        ] {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn test_focused_input_only_for_text_fields() {
        let mut state = LoginState::default();
        assert!(state.focused_input_mut().is_some());
        state.focused_field = LoginField::SignUp;
        assert!(state.focused_input_mut().is_none());

        let mut state = RegistrationState {
            focused_field: RegistrationField::Register,
            ..Default::default()
        };
        assert!(state.focused_input_mut().is_none());
    }
}
