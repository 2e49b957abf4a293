use crate::error::ShortenError;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenError>;

/// A client for an external URL-shortening service.
#[async_trait]
pub trait UrlShortener: Send + Sync + 'static {
    /// Exchanges a long URL for a shortened one.
    async fn shorten(&self, url: &str) -> Result<String>;
}
