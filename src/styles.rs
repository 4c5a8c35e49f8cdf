//! Theme and style system
//!
//! Provides consistent styling across the screens with support for
//! light, dark and colorless terminals.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Global theme instance (written once at startup)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::Cyan,
    accent: Color::Red,
    on_accent: Color::White,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Yellow,
    border: Color::DarkGray,
    border_focused: Color::Cyan,
    surface_variant: Color::DarkGray,
});

/// Initialize the global theme (call once at startup)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    #[value(name = "nocolor", alias = "no-color")]
    NoColor,
}

impl FromStr for ThemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(ThemeType::Dark),
            "light" => Ok(ThemeType::Light),
            "nocolor" | "no-color" | "no_color" => Ok(ThemeType::NoColor),
            other => Err(format!(
                "unknown theme '{}' (expected dark, light or nocolor)",
                other
            )),
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Titles and focused accents
    pub primary: Color,
    /// Button fill
    pub accent: Color,
    /// Text drawn on top of `accent`
    pub on_accent: Color,
    /// Inline error text
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    pub border: Color,
    pub border_focused: Color,
    /// Card background
    pub surface_variant: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            accent: Color::Red,
            on_accent: Color::White,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            surface_variant: Color::Rgb(48, 48, 56),
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            accent: Color::Red,
            on_accent: Color::White,
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            surface_variant: Color::Rgb(225, 225, 235),
        }
    }

    /// No-color theme - style helpers fall back to modifiers only
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            accent: Color::Reset,
            on_accent: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            surface_variant: Color::Reset,
        }
    }

    fn is_no_color(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text (placeholders, hints)
    pub fn muted_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (key hints)
    pub fn emphasis_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.text_emphasis)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inline error messages
    pub fn error_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        Style::default().fg(self.error)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for a button face
    pub fn button_style(&self, focused: bool) -> Style {
        if self.is_no_color() {
            return if focused {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
        }
        let style = Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Style for card surfaces
    pub fn card_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.text).bg(self.surface_variant)
    }
}
