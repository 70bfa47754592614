//! Core domain types for the price pipeline

pub mod config;
pub mod error;
pub mod log;
pub mod quote;
pub mod source;

// Re-export main types for cleaner imports
pub use error::{AllSourcesExhausted, FetchError, NormalizeError};
pub use quote::{PriceMap, currency_symbol, format_price};
pub use source::{PriceSource, SchemaKind};
