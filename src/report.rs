//! Plain-text report rendering and persistence.

use crate::core::{PriceMap, format_price};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 40;

/// Renders the report body: a timestamped header followed by one line per
/// currency in code order.
pub fn render_report(prices: &PriceMap) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut body = format!("BITCOIN PRICE REPORT\n{rule}\nGenerated: {timestamp}\n{rule}\n");
    for (currency, price) in prices {
        body.push_str(&format!("{currency}: {}\n", format_price(currency, price)));
    }
    body
}

/// Writes the report to `path`, creating parent directories as needed.
pub fn write_report(prices: &PriceMap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, render_report(prices))
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!("Report written to {}", path.display());
    Ok(())
}
