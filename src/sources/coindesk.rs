use crate::core::{NormalizeError, PriceMap, SchemaKind};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Coindesk's `currentprice.json` document. Only the `bpi` table matters;
/// its rate strings come pre-formatted with thousands separators.
#[derive(Debug, Deserialize)]
struct CoindeskResponse {
    bpi: BTreeMap<String, CoindeskQuote>,
}

#[derive(Debug, Deserialize)]
struct CoindeskQuote {
    rate: String,
}

pub(super) fn parse(raw: &Value) -> Result<PriceMap, NormalizeError> {
    let response: CoindeskResponse =
        serde_json::from_value(raw.clone()).map_err(|source| NormalizeError::SchemaMismatch {
            kind: SchemaKind::Coindesk,
            source,
        })?;

    Ok(response
        .bpi
        .into_iter()
        .map(|(code, quote)| (code, quote.rate))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_bpi_rates() {
        let raw = json!({
            "time": {"updated": "Aug 7, 2026 12:00:00 UTC"},
            "chartName": "Bitcoin",
            "bpi": {
                "USD": {"code": "USD", "symbol": "&#36;", "rate": "65,123.4567", "rate_float": 65123.4567},
                "GBP": {"code": "GBP", "symbol": "&pound;", "rate": "52,000.2500", "rate_float": 52000.25},
                "EUR": {"code": "EUR", "symbol": "&euro;", "rate": "60,000.1234", "rate_float": 60000.1234}
            }
        });

        let prices = parse(&raw).unwrap();
        assert_eq!(prices.len(), 3);
        assert_eq!(prices.get("USD"), Some(&"65,123.4567".to_string()));
        assert_eq!(prices.get("GBP"), Some(&"52,000.2500".to_string()));
        assert_eq!(prices.get("EUR"), Some(&"60,000.1234".to_string()));
    }

    #[test]
    fn test_missing_bpi_is_a_schema_mismatch() {
        let raw = json!({"data": {"rates": {"USD": "65000"}}});
        let err = parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::SchemaMismatch {
                kind: SchemaKind::Coindesk,
                ..
            }
        ));
    }

    #[test]
    fn test_member_without_rate_is_a_schema_mismatch() {
        let raw = json!({"bpi": {"USD": {"code": "USD"}}});
        assert!(parse(&raw).is_err());
    }
}
