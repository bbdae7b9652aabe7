use anyhow::{Context, Result};
use assist::core::OsFilesystem;
use assist::engine::Config;
use assist::states::{menu, INTRO_MESSAGE};
use assist::ui::Terminal;
use assist::AutomatBuilder;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;

    let mut automat = AutomatBuilder::new()
        .initial(menu(INTRO_MESSAGE))
        .config(config.clone())
        .filesystem(OsFilesystem)
        .os_env(std::env::vars_os())
        .build()
        .context("Failed to build the automaton")?;
    automat.check()?;

    let outcome = {
        let mut terminal = Terminal::enter(config.clone()).context("Failed to set up the terminal")?;
        automat.run(&mut terminal.display, &mut terminal.keyboard)
    };

    if let Some(path) = &config.transcript_path {
        automat
            .transcript()
            .write_to(path)
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
        info!(path = %path.display(), "transcript written");
    }

    outcome.context("Session aborted")
}

/// Log to the file named by `ASSIST_LOG_FILE`; stdout belongs to the UI.
fn init_logging() -> Result<()> {
    let Ok(log_path) = std::env::var("ASSIST_LOG_FILE") else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {log_path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

/// Read the JSON file named by `ASSIST_CONFIG`, or use defaults.
fn load_config() -> Result<Config> {
    match std::env::var_os("ASSIST_CONFIG") {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            Config::load(&path).with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}
