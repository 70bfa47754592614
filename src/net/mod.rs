//! Network access: the connectivity probe and the HTTP fetcher.

pub mod connectivity;
pub mod fetch;

pub use fetch::{HttpFetcher, QuoteFetcher};
