use async_trait::async_trait;

use crate::domain::DocumentContent;

#[async_trait]
pub trait PdfExtractor: Send + Sync {
    async fn extract(&self, data: &[u8]) -> Result<DocumentContent, PdfExtractError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfExtractError {
    #[error("failed to parse PDF: {0}")]
    ParseFailed(String),
    #[error("PDF extraction timed out")]
    Timeout,
}
