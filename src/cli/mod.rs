//! Command-line interface.
//!
//! With no subcommand the binary launches the TUI; subcommands print
//! something and exit.

mod completions;

use crate::config::Config;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Login, registration and home screens in the terminal
#[derive(Parser, Debug)]
#[command(name = "navegacao", version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, value_name = "THEME")]
    pub theme: Option<ThemeType>,

    /// Disable colors
    #[arg(long)]
    pub no_colors: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration as TOML
    Config,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file to read: `--config` or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Pick the theme: `--no-colors`, then `--theme`, then `NO_COLOR`,
    /// then the config file.
    pub fn resolve_theme(&self, config: &Config, no_color_env: bool) -> ThemeType {
        let theme = if self.no_colors {
            ThemeType::NoColor
        } else if let Some(theme) = self.theme {
            theme
        } else if no_color_env {
            ThemeType::NoColor
        } else {
            config.theme_type()
        };
        debug!("Resolved theme: {:?}", theme);
        theme
    }

    /// Run a subcommand.
    ///
    /// Returns `false` when there is none and the TUI should start.
    pub fn execute(&self, config: &Config, config_path: &Path) -> Result<bool> {
        match &self.command {
            Some(Commands::Config) => {
                Self::cmd_config(config, config_path)?;
                Ok(true)
            }
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn cmd_config(config: &Config, config_path: &Path) -> Result<()> {
        let toml = config.to_toml().context("Failed to serialize configuration")?;
        println!("# {}", config_path.display());
        print!("{}", toml);
        Ok(())
    }
}
