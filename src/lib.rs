//! Navegacao - login, registration and home screens in the terminal
//!
//! Three screens connected by a small navigation graph. Login accepts any
//! username whose password is identical to it; registration stores nothing.

pub mod app;
pub mod auth;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod navigation;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::{App, AppState};
pub use auth::{AuthError, Credentials};
pub use config::Config;
pub use navigation::NavigationHost;
pub use screens::ScreenAction;
pub use ui::Screen;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
