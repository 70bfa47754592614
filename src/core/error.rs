//! Failure taxonomy for the fetch-and-normalize pipeline.
//!
//! Every per-source failure here is recoverable: the orchestrator logs it
//! and moves on to the next candidate. Only [`AllSourcesExhausted`] reaches
//! the user-facing flow.

use crate::core::source::SchemaKind;
use std::time::Duration;
use thiserror::Error;

/// A single fetch attempt failed before yielding usable JSON.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A fetched body could not be mapped to a price table.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The source's schema is not one we have a rule for. Soft-skipped
    /// during fallback.
    #[error("no normalization rule for this source")]
    UnsupportedSource,

    #[error("response does not match the {kind} schema")]
    SchemaMismatch {
        kind: SchemaKind,
        #[source]
        source: serde_json::Error,
    },

    /// A well-formed response with nothing in it counts as a failure so
    /// the caller never mistakes a degenerate answer for success.
    #[error("source returned an empty price table")]
    EmptyPrices,
}

/// Every candidate in the fallback order was attempted without success.
#[derive(Debug, Error)]
#[error("all {attempts} price sources failed")]
pub struct AllSourcesExhausted {
    pub attempts: usize,
}
