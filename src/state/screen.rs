//! Screen-specific state management.
//!
//! A single enum holds the controller of the visible screen, so exactly one
//! screen's state exists at a time.

use crate::screens::{HomeScreen, LoginScreen, RegistrationScreen, Screen};
use crate::ui::Screen as ScreenId;

/// Union type for all screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// match host.screen_state() {
///     ScreenState::Login(login) => {
///         assert!(login.error_message().is_none());
///     }
///     _ => {}
/// }
/// ```
#[derive(Debug)]
pub enum ScreenState {
    Login(LoginScreen),
    Registration(RegistrationScreen),
    Home(HomeScreen),
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Login(LoginScreen::new())
    }
}

impl ScreenState {
    /// Fresh state for `screen`.
    pub fn for_screen(screen: ScreenId) -> Self {
        match screen {
            ScreenId::Login => Self::Login(LoginScreen::new()),
            ScreenId::Registration => Self::Registration(RegistrationScreen::new()),
            ScreenId::Home => Self::Home(HomeScreen::new()),
        }
    }

    /// Which screen this state belongs to.
    pub fn current_screen(&self) -> ScreenId {
        match self {
            Self::Login(_) => ScreenId::Login,
            Self::Registration(_) => ScreenId::Registration,
            Self::Home(_) => ScreenId::Home,
        }
    }

    pub fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Login(s) => s,
            Self::Registration(s) => s,
            Self::Home(s) => s,
        }
    }

    pub fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Login(s) => s,
            Self::Registration(s) => s,
            Self::Home(s) => s,
        }
    }

    pub fn as_login(&self) -> Option<&LoginScreen> {
        match self {
            Self::Login(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_registration(&self) -> Option<&RegistrationScreen> {
        match self {
            Self::Registration(s) => Some(s),
            _ => None,
        }
    }
}
