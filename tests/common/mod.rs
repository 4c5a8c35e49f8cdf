//! Shared helpers for driving the app with synthetic key events.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use navegacao::app::AppState;
use navegacao::config::Config;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Fresh app state with default configuration.
pub fn app() -> AppState {
    AppState::new(Config::default())
}

pub fn press(app: &mut AppState, code: KeyCode) {
    app.handle_event(key(code)).unwrap();
}

/// Type `text` one character at a time into whatever has focus.
pub fn type_str(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill both login fields and leave focus on the password field.
pub fn fill_login(app: &mut AppState, username: &str, password: &str) {
    type_str(app, username);
    press(app, KeyCode::Tab);
    type_str(app, password);
}

/// Render one frame and return the buffer contents, one line per row.
pub fn render(app: &mut AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
