//! Fallback orchestration across the configured price sources.

use crate::core::{AllSourcesExhausted, PriceMap, PriceSource};
use crate::net::QuoteFetcher;
use crate::sources;
use tracing::{info, warn};

/// A successful resolution: the first non-empty price table found, along
/// with which candidate produced it.
#[derive(Debug)]
pub struct Resolution {
    pub prices: PriceMap,
    pub source: PriceSource,
    pub attempt: usize,
}

/// Walks `candidates` in order, fetching and normalizing each until one
/// yields a non-empty price table. Sources are attempted exactly once,
/// strictly sequentially; the first success wins and later candidates are
/// never contacted. Results are never merged across sources.
pub async fn resolve_prices(
    fetcher: &dyn QuoteFetcher,
    candidates: &[PriceSource],
) -> Result<Resolution, AllSourcesExhausted> {
    for (index, source) in candidates.iter().enumerate() {
        let attempt = index + 1;
        info!(attempt, url = %source.url, "Trying price source");

        let raw = match fetcher.fetch(&source.url).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(url = %source.url, error = %err, "Fetch failed, trying next source");
                continue;
            }
        };

        match sources::normalize(&raw, source.kind) {
            Ok(prices) => {
                info!(url = %source.url, currencies = prices.len(), "Price source succeeded");
                return Ok(Resolution {
                    prices,
                    source: source.clone(),
                    attempt,
                });
            }
            Err(err) => {
                warn!(url = %source.url, error = %err, "Normalization failed, trying next source");
            }
        }
    }

    Err(AllSourcesExhausted {
        attempts: candidates.len(),
    })
}
