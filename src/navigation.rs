//! Navigation host.
//!
//! Owns the active screen and moves between the three screens. Screens only
//! ever ask for a destination; the host builds the destination's state from
//! scratch, so leaving a screen discards whatever was typed there.

use crate::screens::{RenderContext, ScreenAction, ScreenContext};
use crate::state::ScreenState;
use crate::ui::Screen;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{info, warn};

/// Transitions a screen can request.
pub fn reachable_from(screen: Screen) -> &'static [Screen] {
    match screen {
        Screen::Login => &[Screen::Home, Screen::Registration],
        Screen::Registration => &[Screen::Login],
        Screen::Home => &[Screen::Login],
    }
}

#[derive(Debug, Default)]
pub struct NavigationHost {
    screen_state: ScreenState,
}

impl NavigationHost {
    /// Start at the login screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.screen_state.current_screen()
    }

    pub fn screen_state(&self) -> &ScreenState {
        &self.screen_state
    }

    /// Replace the active screen with a fresh instance of `target`.
    ///
    /// Moves outside the graph are still honoured but logged.
    pub fn go_to(&mut self, target: Screen, ctx: &ScreenContext) -> Result<()> {
        let from = self.current();
        if !reachable_from(from).contains(&target) {
            warn!("Unexpected transition {:?} -> {:?}", from, target);
        }

        self.screen_state.as_screen_mut().on_exit(ctx)?;
        self.screen_state = ScreenState::for_screen(target);
        self.screen_state.as_screen_mut().on_enter(ctx)?;

        info!("Navigated {:?} -> {:?}", from, target);
        Ok(())
    }

    /// Forward an event to the active screen.
    ///
    /// Navigation requests are applied here; the action is returned so the
    /// caller can react to quit and help requests.
    pub fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let action = self.screen_state.as_screen_mut().handle_event(event, ctx)?;
        if let ScreenAction::Navigate(target) = action {
            self.go_to(target, ctx)?;
        }
        Ok(action)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        self.screen_state.as_screen_mut().render(frame, area, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_starts_at_login() {
        assert_eq!(NavigationHost::new().current(), Screen::Login);
    }

    #[test]
    fn test_graph_edges() {
        assert_eq!(reachable_from(Screen::Login).len(), 2);
        assert!(reachable_from(Screen::Login).contains(&Screen::Home));
        assert!(reachable_from(Screen::Login).contains(&Screen::Registration));
        assert_eq!(reachable_from(Screen::Registration), &[Screen::Login]);
        assert_eq!(reachable_from(Screen::Home), &[Screen::Login]);
    }

    #[test]
    fn test_go_to_builds_fresh_state() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut host = NavigationHost::new();
        for c in "abc".chars() {
            let key = Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            host.handle_event(key, &ctx).unwrap();
        }
        assert_eq!(
            host.screen_state().as_login().unwrap().state().username_input.text(),
            "abc"
        );

        host.go_to(Screen::Registration, &ctx).unwrap();
        assert_eq!(host.current(), Screen::Registration);
        host.go_to(Screen::Login, &ctx).unwrap();

        let login = host.screen_state().as_login().unwrap();
        assert!(login.state().username_input.is_empty());
        assert!(login.error_message().is_none());
    }

    #[test]
    fn test_off_graph_transition_is_honoured() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut host = NavigationHost::new();
        host.go_to(Screen::Home, &ctx).unwrap();
        host.go_to(Screen::Registration, &ctx).unwrap();
        assert_eq!(host.current(), Screen::Registration);
    }
}
