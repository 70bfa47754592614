use crate::core::{NormalizeError, PriceMap, SchemaKind};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Coingecko's `simple/price` document: one `bitcoin` object keyed by
/// lower-case currency code with plain numeric prices.
#[derive(Debug, Deserialize)]
struct CoingeckoResponse {
    bitcoin: BTreeMap<String, serde_json::Number>,
}

pub(super) fn parse(raw: &Value) -> Result<PriceMap, NormalizeError> {
    let response: CoingeckoResponse =
        serde_json::from_value(raw.clone()).map_err(|source| NormalizeError::SchemaMismatch {
            kind: SchemaKind::Coingecko,
            source,
        })?;

    Ok(response
        .bitcoin
        .into_iter()
        .map(|(code, price)| (code.to_uppercase(), price.to_string()))
        .collect())
}
