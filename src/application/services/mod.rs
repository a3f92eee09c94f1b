mod analyzer;
mod responder;
mod summarizer;
mod text_format;

pub use analyzer::{analyze, ContentAnalysis, ContentStats, WordCount, TOP_WORD_COUNT};
pub use responder::{rule_based_response, ChatResponder, GREETING_RESPONSE};
pub use summarizer::{summarize_document, summarize_web};
pub use text_format::{group_thousands, truncate_chars, truncate_with_ellipsis};
