//! Screen controllers for the application.
//!
//! Each controller implements the [`Screen`] trait, owns its state, and
//! reports navigation by returning a [`ScreenAction`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  NavigationHost                       │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │  ScreenState                                    │  │
//! │  │    Login(LoginScreen)                           │  │
//! │  │    Registration(RegistrationScreen)             │  │
//! │  │    Home(HomeScreen)                             │  │
//! │  └────────────────────────────────────────────────┘  │
//! │                                                       │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │  Screen Trait                                   │  │
//! │  │  - render(frame, area, context)                │  │
//! │  │  - handle_event(event, context) -> Action      │  │
//! │  │  - is_input_focused() -> bool                  │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Login to Home requires matching credentials; Login to Registration,
//! Registration to Login and Home to Login are unconditional.

pub mod home;
pub mod login;
pub mod registration;
pub mod screen_trait;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use registration::RegistrationScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
