//! Application state management.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    App                               │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────────┐    ┌──────────────────────────┐  │
//! │  │ GlobalState   │    │ ScreenState              │  │
//! │  │               │    │ ┌────────────────────┐   │  │
//! │  │ - help_shown  │    │ │ Login(screen)      │   │  │
//! │  │ - should_quit │    │ │ Registration(..)   │   │  │
//! │  │               │    │ │ Home(..)           │   │  │
//! │  └───────────────┘    │ └────────────────────┘   │  │
//! │                       └──────────────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod global;
pub mod screen;

pub use global::GlobalState;
pub use screen::ScreenState;
