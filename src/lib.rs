pub mod cli;
pub mod core;
pub mod net;
pub mod report;
pub mod resolve;
pub mod sources;

use anyhow::Result;
use tracing::{debug, info};

pub use cli::report::ReportOptions;

/// Application commands, decoupled from the clap surface in `main`.
#[derive(Debug)]
pub enum AppCommand {
    Report(ReportOptions),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Bitcoin price fetcher starting...");

    let config = match config_path {
        Some(path) => core::config::AppConfig::load_from_path(path)?,
        None => core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Report(options) => cli::report::run(&config, options).await,
    }
}
