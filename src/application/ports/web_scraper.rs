use async_trait::async_trait;

#[async_trait]
pub trait WebScraper: Send + Sync {
    /// Fetches the URL and returns the flattened, bounded text content.
    async fn scrape(&self, url: &str) -> Result<String, ScrapeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {0}")]
    BadStatus(u16),
    #[error("{0}")]
    Transport(String),
}
