//! The `report` command: resolve prices, pick currencies, persist.

use super::{prompt, ui};
use crate::core::config::AppConfig;
use crate::core::{PriceMap, format_price};
use crate::net::{HttpFetcher, connectivity};
use crate::report;
use crate::resolve;
use anyhow::{Context, Result, bail};
use comfy_table::Cell;
use dialoguer::console::Term;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Options for one report run, typically parsed from the command line.
/// Anything left unset is resolved interactively, or from configuration
/// when no terminal is attached.
#[derive(Debug, Default, Clone)]
pub struct ReportOptions {
    /// Overrides the configured primary API URL.
    pub url: Option<String>,
    /// Restricts the report to these currency codes.
    pub currencies: Option<Vec<String>>,
    /// Report destination; defaults to the configured path.
    pub output: Option<PathBuf>,
    /// Never prompt, even on a terminal.
    pub no_input: bool,
}

impl ReportOptions {
    fn interactive(&self) -> bool {
        !self.no_input && std::io::stdin().is_terminal()
    }
}

pub async fn run(config: &AppConfig, options: ReportOptions) -> Result<()> {
    let term = Term::stderr();
    let interactive = options.interactive();

    println!(
        "{}",
        ui::style_text("Bitcoin Price Report", ui::StyleType::Title)
    );

    let probe = &config.network.connectivity_probe;
    if !probe.is_empty() && !connectivity::check(probe, PROBE_TIMEOUT).await {
        eprintln!(
            "{}",
            ui::style_text("No internet connection detected", ui::StyleType::Error)
        );
        if interactive {
            prompt::acknowledge_exit(&term);
        }
        return Ok(());
    }

    let primary_url = match &options.url {
        Some(url) => Some(url.clone()),
        None if interactive => Some(prompt::prompt_primary_url(
            &term,
            &config.sources.primary.url,
        )?),
        None => None,
    };
    let candidates = config.sources.candidates(primary_url.as_deref());
    debug!("Fallback order: {candidates:#?}");

    let fetcher =
        HttpFetcher::new(config.network.timeout()).context("Failed to build HTTP client")?;

    let spinner = ui::new_spinner("Fetching Bitcoin prices...");
    let resolution = resolve::resolve_prices(&fetcher, &candidates).await;
    spinner.finish_and_clear();

    let resolution = match resolution {
        Ok(resolution) => resolution,
        Err(err) => {
            eprintln!("{}", ui::style_text(&err.to_string(), ui::StyleType::Error));
            eprintln!("Possible solutions:");
            eprintln!("  1. Check your internet connection");
            eprintln!("  2. Try again later (the APIs might be down)");
            eprintln!("  3. Use a VPN (might bypass network restrictions)");
            if interactive {
                prompt::acknowledge_exit(&term);
            }
            return Ok(());
        }
    };

    println!(
        "{}",
        ui::style_text(
            &format!(
                "Prices from {} (attempt {})",
                resolution.source.url, resolution.attempt
            ),
            ui::StyleType::Subtle
        )
    );

    let available: Vec<String> = resolution.prices.keys().cloned().collect();
    let selected = match &options.currencies {
        Some(codes) => {
            let codes: Vec<String> = codes.iter().map(|code| code.trim().to_uppercase()).collect();
            let invalid = prompt::invalid_selections(&codes, &available);
            if !invalid.is_empty() {
                bail!("Unknown currencies: {}", invalid.join(", "));
            }
            codes
        }
        None if interactive => prompt::select_currencies(&term, &available)?,
        None => available.clone(),
    };

    let prices: PriceMap = resolution
        .prices
        .iter()
        .filter(|(code, _)| selected.contains(*code))
        .map(|(code, price)| (code.clone(), price.clone()))
        .collect();

    println!("{}", display_table(&prices));

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| config.report.file.clone());
    report::write_report(&prices, &output)?;
    println!(
        "{}",
        ui::style_text(
            &format!("Report saved to {}", output.display()),
            ui::StyleType::Value
        )
    );

    Ok(())
}

fn display_table(prices: &PriceMap) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Price")]);
    for (currency, price) in prices {
        table.add_row(vec![
            Cell::new(currency),
            ui::price_cell(&format_price(currency, price)),
        ]);
    }
    table.to_string()
}
