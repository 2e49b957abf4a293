use aperture_core::{IssueError, LinkIssuer};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, IssueError>;

/// Hands the provider URL back unchanged.
#[derive(Debug, Clone, Default)]
pub struct DirectLinks;

impl DirectLinks {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LinkIssuer for DirectLinks {
    async fn issue(&self, target_url: String) -> Result<String> {
        Ok(target_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issue_is_identity() {
        let links = DirectLinks::new();
        let url = links
            .issue("https://img.example/long.png".to_string())
            .await
            .unwrap();
        assert_eq!(url, "https://img.example/long.png");
    }
}
