mod chat;
mod content;
mod health;
mod index;
mod mode;
mod scrape;
mod test_ai;
mod upload;

use serde::Serialize;

use crate::application::services::ContentAnalysis;

pub use chat::chat_handler;
pub use content::{clear_content_handler, clear_history_handler, status_handler};
pub use health::health_handler;
pub use index::index_handler;
pub use mode::set_mode_handler;
pub use scrape::scrape_website_handler;
pub use test_ai::test_ai_handler;
pub use upload::upload_pdf_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// The stats subset echoed by the upload and scrape endpoints.
#[derive(Serialize)]
pub struct AnalysisSummary {
    pub total_lines: usize,
    pub total_characters: usize,
    pub total_words: usize,
    pub avg_line_length: f64,
}

impl From<&ContentAnalysis> for AnalysisSummary {
    fn from(analysis: &ContentAnalysis) -> Self {
        Self {
            total_lines: analysis.stats.total_lines,
            total_characters: analysis.stats.total_characters,
            total_words: analysis.stats.total_words,
            avg_line_length: analysis.stats.avg_line_length,
        }
    }
}
