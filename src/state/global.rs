//! Global application state shared across all screens.

/// State that survives screen changes.
#[derive(Debug, Clone, Default)]
pub struct GlobalState {
    /// Whether the help overlay is visible.
    pub show_help_overlay: bool,

    /// Set once the user asked to leave; the main loop exits after the frame.
    pub should_quit: bool,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help_overlay = !self.show_help_overlay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_help() {
        let mut state = GlobalState::new();
        assert!(!state.show_help_overlay);
        state.toggle_help();
        assert!(state.show_help_overlay);
        state.toggle_help();
        assert!(!state.show_help_overlay);
    }
}
