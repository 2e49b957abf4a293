use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid link id: {0}")]
    InvalidLinkId(String),
}

/// Errors from the short-link store backends.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("link store unavailable: {0}")]
    Unavailable(String),
    #[error("link store operation timed out: {0}")]
    Timeout(String),
    #[error("link record serialization failed: {0}")]
    Serialization(String),
    #[error("link record is invalid: {0}")]
    InvalidData(String),
    #[error("link store initialization failed: {0}")]
    Initialization(String),
    #[error("link store operation failed: {0}")]
    Operation(String),
}

/// Errors from the image-generation provider.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("image provider rejected the request: {0}")]
    Api(String),
    #[error("image provider request timed out: {0}")]
    Timeout(String),
    #[error("image provider transport failed: {0}")]
    Transport(String),
    #[error("image provider returned an unusable response: {0}")]
    InvalidResponse(String),
}

/// Errors from the external URL-shortening service.
#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    #[error("shortener rejected the request: {0}")]
    Api(String),
    #[error("shortener request timed out: {0}")]
    Timeout(String),
    #[error("shortener transport failed: {0}")]
    Transport(String),
}

/// Errors from turning a provider URL into a caller-facing link.
#[derive(Debug, Clone, Error)]
pub enum IssueError {
    #[error(transparent)]
    Storage(#[from] StoreError),
}
