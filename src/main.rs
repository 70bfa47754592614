use anyhow::Result;
use btcq::ReportOptions;
use btcq::core::log::init_logging;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch Bitcoin prices and write the text report
    Report(ReportArgs),
}

#[derive(Args, Default)]
struct ReportArgs {
    /// Primary API URL to try before the configured backups
    #[arg(long)]
    url: Option<String>,

    /// Comma-separated currency codes to include (default: all)
    #[arg(long, value_delimiter = ',')]
    currencies: Option<Vec<String>>,

    /// Report file destination
    #[arg(long)]
    output: Option<PathBuf>,

    /// Never prompt; use configured defaults for anything not given
    #[arg(long)]
    no_input: bool,
}

impl From<ReportArgs> for ReportOptions {
    fn from(args: ReportArgs) -> ReportOptions {
        ReportOptions {
            url: args.url,
            currencies: args.currencies,
            output: args.output,
            no_input: args.no_input,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(Commands::Setup) => {
            let result = btcq::cli::setup::setup();
            if let Err(e) = &result {
                tracing::error!(error = %e, "Application failed");
            }
            return result;
        }
        Some(Commands::Report(args)) => btcq::AppCommand::Report(args.into()),
        // A bare invocation runs the interactive report flow
        None => btcq::AppCommand::Report(ReportOptions::default()),
    };

    let result = btcq::run_command(command, cli.config_path.as_deref()).await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
