use aperture_core::{IssueError, LinkIssuer, UrlShortener};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

type Result<T> = std::result::Result<T, IssueError>;

/// Publishes links through an external shortening service.
///
/// Any shortener failure falls back to the original URL, so `issue`
/// never errors here; the worst case is a long link instead of a short
/// one.
#[derive(Debug, Clone)]
pub struct ShortenedLinks<S> {
    shortener: Arc<S>,
}

impl<S: UrlShortener> ShortenedLinks<S> {
    pub fn new(shortener: S) -> Self {
        Self {
            shortener: Arc::new(shortener),
        }
    }
}

#[async_trait]
impl<S: UrlShortener> LinkIssuer for ShortenedLinks<S> {
    async fn issue(&self, target_url: String) -> Result<String> {
        match self.shortener.shorten(&target_url).await {
            Ok(short) => Ok(short),
            Err(e) => {
                warn!(error = %e, "Shortening failed, returning the original URL");
                Ok(target_url)
            }
        }
    }
}
