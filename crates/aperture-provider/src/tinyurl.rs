use aperture_core::{ShortenError, UrlShortener};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, ShortenError>;

/// Public creation endpoint of the hosted service.
pub const DEFAULT_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

// Shortening is a secondary feature; it must not stall image delivery.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for a TinyURL-style shortening endpoint.
///
/// The service takes the long URL as a `url` query parameter and answers
/// with the short URL as a plain-text body.
#[derive(Debug, Clone)]
pub struct TinyUrlShortener {
    http: reqwest::Client,
    endpoint: String,
}

impl TinyUrlShortener {
    /// Creates a client for the given creation endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ShortenError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl UrlShortener for TinyUrlShortener {
    async fn shorten(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ShortenError::Timeout(e.to_string())
                } else {
                    ShortenError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::Api(format!("unexpected status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ShortenError::Transport(format!("failed to read body: {e}")))?;

        let short = body.trim();
        if short.is_empty() {
            return Err(ShortenError::Api("empty response body".to_string()));
        }

        debug!(short = %short, "Shortened URL");
        Ok(short.to_string())
    }
}
