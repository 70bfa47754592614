use crate::core::{NormalizeError, PriceMap, SchemaKind};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// blockchain.info's ticker has no envelope: the top-level members are the
/// currency codes themselves, each quoting several price points.
#[derive(Debug, Deserialize)]
struct BlockchainTicker {
    last: serde_json::Number,
}

pub(super) fn parse(raw: &Value) -> Result<PriceMap, NormalizeError> {
    let response: BTreeMap<String, BlockchainTicker> =
        serde_json::from_value(raw.clone()).map_err(|source| NormalizeError::SchemaMismatch {
            kind: SchemaKind::Blockchain,
            source,
        })?;

    Ok(response
        .into_iter()
        .map(|(code, ticker)| (code, ticker.last.to_string()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_last_price_per_currency() {
        let raw = json!({
            "USD": {"15m": 65001.0, "last": 65000.5, "buy": 65000.5, "sell": 65000.5, "symbol": "$"},
            "EUR": {"15m": 60001.0, "last": 60000.25, "buy": 60000.25, "sell": 60000.25, "symbol": "€"},
            "JPY": {"15m": 9500000, "last": 9500001, "buy": 9500001, "sell": 9500001, "symbol": "¥"}
        });

        let prices = parse(&raw).unwrap();
        assert_eq!(prices.len(), 3);
        assert_eq!(prices.get("USD"), Some(&"65000.5".to_string()));
        assert_eq!(prices.get("EUR"), Some(&"60000.25".to_string()));
        assert_eq!(prices.get("JPY"), Some(&"9500001".to_string()));
    }

    #[test]
    fn test_member_without_last_is_a_schema_mismatch() {
        let raw = json!({
            "USD": {"15m": 65001.0, "buy": 65000.5}
        });
        let err = parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::SchemaMismatch {
                kind: SchemaKind::Blockchain,
                ..
            }
        ));
    }

    #[test]
    fn test_non_object_document_is_a_schema_mismatch() {
        let raw = json!([1, 2, 3]);
        assert!(parse(&raw).is_err());
    }
}
