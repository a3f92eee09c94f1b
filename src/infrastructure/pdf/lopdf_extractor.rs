use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{PdfExtractError, PdfExtractor};
use crate::domain::DocumentContent;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// lopdf-backed extractor. Writes the upload to a temp file that is removed
/// on every exit path and runs the CPU-bound parse on the blocking pool.
#[derive(Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<DocumentContent, PdfExtractError> {
        let doc =
            Document::load(path).map_err(|e| PdfExtractError::ParseFailed(e.to_string()))?;

        let pages = doc.get_pages();
        let num_pages = pages.len();

        let mut text = String::new();
        // BTreeMap keys give ascending page numbers starting at 1. A page
        // with no extractable text still contributes its marker.
        for page_number in pages.keys() {
            text.push_str(&format!("--- Page {} ---\n", page_number));

            let page_text = doc.extract_text(&[*page_number]).unwrap_or_default();
            if !page_text.trim().is_empty() {
                text.push_str(page_text.trim_end());
                text.push_str("\n\n");
            }
        }

        Ok(DocumentContent::new(text, num_pages))
    }
}

#[async_trait]
impl PdfExtractor for LopdfExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: &[u8]) -> Result<DocumentContent, PdfExtractError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            PdfExtractError::ParseFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            PdfExtractError::ParseFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let content = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| PdfExtractError::Timeout)?
        .map_err(|e| PdfExtractError::ParseFailed(format!("task join error: {e}")))??;

        tracing::info!(
            num_pages = content.num_pages,
            chars = content.text.len(),
            "PDF text extraction complete"
        );

        Ok(content)
    }
}
