//! Per-source response normalization.
//!
//! Each public API reports Bitcoin prices in its own JSON shape. The
//! modules here map one shape each into the common [`PriceMap`].

mod blockchain;
mod coinbase;
mod coindesk;
mod coingecko;

use crate::core::{NormalizeError, PriceMap, SchemaKind};
use serde_json::Value;

/// Maps a raw source document to a price table using the rule for `kind`.
///
/// An empty table is reported as an error so that the fallback scan never
/// mistakes a degenerate response for success.
pub fn normalize(raw: &Value, kind: SchemaKind) -> Result<PriceMap, NormalizeError> {
    let prices = match kind {
        SchemaKind::Coindesk => coindesk::parse(raw)?,
        SchemaKind::Coingecko => coingecko::parse(raw)?,
        SchemaKind::Blockchain => blockchain::parse(raw)?,
        SchemaKind::Coinbase => coinbase::parse(raw)?,
        SchemaKind::Unknown => return Err(NormalizeError::UnsupportedSource),
    };

    if prices.is_empty() {
        return Err(NormalizeError::EmptyPrices);
    }
    Ok(prices)
}
