use crate::core::{NormalizeError, PriceMap, SchemaKind};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct CoinbaseResponse {
    data: CoinbaseRates,
}

#[derive(Debug, Deserialize)]
struct CoinbaseRates {
    rates: BTreeMap<String, String>,
}

/// `data.rates` expresses how much of each currency equals 1 BTC, so the
/// table always carries a redundant `BTC: "1"` entry. It is dropped here.
pub(super) fn parse(raw: &Value) -> Result<PriceMap, NormalizeError> {
    let response: CoinbaseResponse =
        serde_json::from_value(raw.clone()).map_err(|source| NormalizeError::SchemaMismatch {
            kind: SchemaKind::Coinbase,
            source,
        })?;

    Ok(response
        .data
        .rates
        .into_iter()
        .filter(|(code, _)| code != "BTC")
        .collect())
}
