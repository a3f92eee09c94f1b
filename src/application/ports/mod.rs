mod chat_client;
mod pdf_extractor;
mod web_scraper;

pub use chat_client::{ChatClient, ChatClientError, ChatMessage, CompletionParams};
pub use pdf_extractor::{PdfExtractError, PdfExtractor};
pub use web_scraper::{ScrapeError, WebScraper};
