use anyhow::{Context, Result};
use clap::Parser;
use navegacao::app::App;
use navegacao::cli::Cli;
use navegacao::config::Config;
use navegacao::styles::init_theme;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = navegacao::tui::restore_terminal();
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;

    if cli.execute(&config, &config_path)? {
        return Ok(());
    }

    setup_panic_hook();

    let log_dir = navegacao::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;
    let log_file = log_dir.join("navegacao.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "navegacao.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    init_theme(cli.resolve_theme(&config, no_color_env));

    info!("Using config {:?}", config_path);
    let mut app = App::new(config)?;
    let result = app.run();
    info!("Exiting");

    // Flush pending log lines
    drop(guard);

    result
}
