//! Bounded, single-shot HTTP fetch of a source's JSON document.

use crate::core::FetchError;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Performs one GET against a source URL. The seam lets orchestrator
/// tests instrument fetch attempts without touching the network.
#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("btcq/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(HttpFetcher { client, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if err.is_decode() {
            FetchError::Decode(err)
        } else {
            FetchError::Connect(err)
        }
    }
}

#[async_trait]
impl QuoteFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        debug!("Requesting price data from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json::<Value>().await.map_err(|e| self.classify(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_server_with(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn test_successful_fetch_returns_json() {
        let body = r#"{"bitcoin": {"usd": 65000.5}}"#;
        let mock_server = mock_server_with(ResponseTemplate::new(200).set_body_string(body)).await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let value = fetcher.fetch(&mock_server.uri()).await.unwrap();
        assert_eq!(value, json!({"bitcoin": {"usd": 65000.5}}));
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let mock_server = mock_server_with(ResponseTemplate::new(500)).await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch(&mock_server.uri()).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Status(status) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_invalid_body_is_a_decode_error() {
        let mock_server =
            mock_server_with(ResponseTemplate::new(200).set_body_string("not json at all")).await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch(&mock_server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let mock_server = mock_server_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .await;

        let fetcher = HttpFetcher::new(Duration::from_millis(100)).unwrap();
        let err = fetcher.fetch(&mock_server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_connect_error() {
        // Grab a port that was live a moment ago, then shut the server down.
        let url = {
            let mock_server = MockServer::start().await;
            mock_server.uri()
        };

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Connect(_)), "got: {err:?}");
    }
}
