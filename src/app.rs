use crate::components::HelpOverlay;
use crate::config::Config;
use crate::navigation::NavigationHost;
use crate::screens::{RenderContext, ScreenAction, ScreenContext};
use crate::state::GlobalState;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use std::time::Duration;
use tracing::{debug, error, info};

/// Everything the event loop mutates, kept apart from the terminal so it
/// can be driven by tests.
pub struct AppState {
    pub config: Config,
    pub host: NavigationHost,
    pub global: GlobalState,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            host: NavigationHost::new(),
            global: GlobalState::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.global.should_quit
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        // Help overlay swallows the next key press
        if self.global.show_help_overlay {
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    self.global.show_help_overlay = false;
                }
            }
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config);
        match self.host.handle_event(event, &ctx)? {
            ScreenAction::Quit => {
                info!("Quit requested from {:?}", self.host.current());
                self.global.should_quit = true;
            }
            ScreenAction::ShowHelp => {
                debug!("Help overlay opened");
                self.global.toggle_help();
            }
            ScreenAction::Navigate(_) | ScreenAction::None => {}
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config);
        if let Err(e) = self.host.render(frame, area, &ctx) {
            error!("Error rendering {:?}: {}", self.host.current(), e);
        }
        if self.global.show_help_overlay {
            if let Err(e) = HelpOverlay::render(frame, area, &self.config.keymap) {
                error!("Error rendering help overlay: {}", e);
            }
        }
    }
}

/// Combine the run and terminal-restore outcomes, reporting the run error
/// first.
fn shutdown_result(run: Result<()>, restore: Result<()>) -> Result<()> {
    if let Err(e) = &restore {
        error!("Failed to restore terminal: {:#}", e);
    }
    run.and(restore)
}

/// Main application
pub struct App {
    tui: Tui,
    state: AppState,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let tui = Tui::new()?;
        Ok(Self {
            tui,
            state: AppState::new(config),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        // Restore on every path, including a partial `enter`
        let result = self.tui.enter().and_then(|()| {
            info!("Started on {:?}", self.state.host.current());
            self.event_loop()
        });
        shutdown_result(result, self.tui.exit())
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if self.state.should_quit() {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.state.handle_event(event)?;
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let state = &mut self.state;
        self.tui.terminal_mut().draw(|frame| state.render(frame))?;
        Ok(())
    }
}
