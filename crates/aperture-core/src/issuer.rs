use crate::error::IssueError;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, IssueError>;

/// Turns a provider image URL into the URL handed back to the client.
///
/// Implementations decide the publication policy: pass the URL through
/// unchanged, shorten it through an external service, or alias it behind
/// a hosted redirect.
#[async_trait]
pub trait LinkIssuer: Send + Sync + 'static {
    /// Produces the caller-facing URL for a freshly generated image.
    async fn issue(&self, target_url: String) -> Result<String>;
}
