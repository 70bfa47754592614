//! Price source identity and schema classification.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The response schema a source speaks, which selects the normalization
/// rule applied to its JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Coindesk,
    Coingecko,
    Blockchain,
    Coinbase,
    /// No known normalization rule. Sources of this kind are skipped
    /// during fallback rather than treated as fatal.
    Unknown,
}

impl SchemaKind {
    /// Classifies a URL by substring. User-entered URLs carry no explicit
    /// schema, so the URL text is the only available hint.
    pub fn from_url(url: &str) -> Self {
        if url.contains("coindesk") {
            SchemaKind::Coindesk
        } else if url.contains("coingecko") {
            SchemaKind::Coingecko
        } else if url.contains("blockchain") {
            SchemaKind::Blockchain
        } else if url.contains("coinbase") {
            SchemaKind::Coinbase
        } else {
            SchemaKind::Unknown
        }
    }
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SchemaKind::Coindesk => "coindesk",
                SchemaKind::Coingecko => "coingecko",
                SchemaKind::Blockchain => "blockchain",
                SchemaKind::Coinbase => "coinbase",
                SchemaKind::Unknown => "unknown",
            }
        )
    }
}

/// One external price endpoint together with its classified schema.
/// Immutable once the candidate list is built at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSource {
    pub url: String,
    pub kind: SchemaKind,
}

impl PriceSource {
    pub fn new(url: impl Into<String>, kind: SchemaKind) -> Self {
        PriceSource {
            url: url.into(),
            kind,
        }
    }

    /// Builds a source from a bare URL, deriving the schema from its text.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = SchemaKind::from_url(&url);
        PriceSource { url, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_kind_from_url() {
        assert_eq!(
            SchemaKind::from_url("https://api.coindesk.com/v2/bpi/currentprice.json"),
            SchemaKind::Coindesk
        );
        assert_eq!(
            SchemaKind::from_url("https://api.coingecko.com/api/v3/simple/price?ids=bitcoin"),
            SchemaKind::Coingecko
        );
        assert_eq!(
            SchemaKind::from_url("https://blockchain.info/ticker"),
            SchemaKind::Blockchain
        );
        assert_eq!(
            SchemaKind::from_url("https://api.coinbase.com/v2/exchange-rates?currency=BTC"),
            SchemaKind::Coinbase
        );
        assert_eq!(
            SchemaKind::from_url("https://api.exchangerate-api.com/v4/latest/USD"),
            SchemaKind::Unknown
        );
    }

    #[test]
    fn test_source_from_url_derives_kind() {
        let source = PriceSource::from_url("https://blockchain.info/ticker");
        assert_eq!(source.kind, SchemaKind::Blockchain);
        assert_eq!(source.url, "https://blockchain.info/ticker");
    }

    #[test]
    fn test_schema_kind_deserializes_from_lowercase() {
        let kind: SchemaKind = serde_yaml::from_str("coingecko").unwrap();
        assert_eq!(kind, SchemaKind::Coingecko);
    }
}
