use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
///
/// Read from `~/.config/navegacao/config.toml` when present. The app never
/// writes this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Render password fields as bullets
    #[serde(default = "default_mask_passwords")]
    pub mask_passwords: bool,
    /// Keyboard bindings
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_mask_passwords() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mask_passwords: default_mask_passwords(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults when the file does not exist
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config
            .theme
            .parse::<ThemeType>()
            .map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Parsed theme type; names rejected by `from_toml` fall back to dark
    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_default()
    }
}
