use std::sync::Arc;

use crate::application::ports::{ChatClient, ChatClientError, ChatMessage, CompletionParams};
use crate::domain::ChatMode;

use super::analyzer::analyze;
use super::summarizer::{summarize_document, summarize_web};
use super::text_format::{group_thousands, truncate_chars, truncate_with_ellipsis};

pub const GREETING_RESPONSE: &str =
    "Hello! I'm your document assistant. I can help you with PDF and web content analysis.";

const HELP_RESPONSE: &str = "I can help you with:
1. Upload and analyze PDF documents
2. Scrape and analyze website content
3. Answer basic questions about loaded content
4. Switch to AI mode for more advanced questions (if enabled)";

const DEFAULT_RESPONSE: &str = "I can analyze your PDF and web content. Please upload a PDF \
or enter a website URL, then ask specific questions about the content.";

const AI_DISABLED_NOTICE: &str = "AI mode is disabled. Using basic mode instead.";

const SYSTEM_PROMPT: &str = "You are ChatGenius, a helpful AI assistant powered by DeepSeek. \n\
Answer questions based on the provided context when available. \n\
If the context doesn't contain the answer, provide a helpful general response.\n\
Be concise but informative, and format your responses clearly with proper paragraphs.\n\
When analyzing PDF or web content, provide detailed insights, summaries, and answer specific \
questions about the content.";

const PAGE_MARKER_PREFIX: &str = "--- Page";

const GREETING_KEYWORDS: [&str; 4] = ["hello", "hi", "hey", "greetings"];
const PDF_KEYWORDS: [&str; 3] = ["pdf", "document", "file"];
const WEB_KEYWORDS: [&str; 5] = ["web", "website", "site", "page", "url"];
const ANALYZE_KEYWORDS: [&str; 4] = ["analyze", "statistics", "stats", "data"];

const PDF_CONTEXT_CHARS: usize = 3000;
const WEB_CONTEXT_CHARS: usize = 2000;

/// Dispatches a question to the rule-based or AI variant and maps every
/// remote failure to chat text, keeping the chat flow available even when
/// the provider is unreachable.
pub struct ChatResponder<C>
where
    C: ChatClient,
{
    chat_client: Arc<C>,
    ai_enabled: bool,
}

impl<C> ChatResponder<C>
where
    C: ChatClient,
{
    pub fn new(chat_client: Arc<C>, ai_enabled: bool) -> Self {
        Self {
            chat_client,
            ai_enabled,
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    pub async fn respond(&self, question: &str, mode: ChatMode, pdf_text: &str, web_text: &str) -> String {
        match mode {
            ChatMode::Ai if self.ai_enabled => self.ai_response(question, pdf_text, web_text).await,
            ChatMode::Ai => format!(
                "{}\n\n{}",
                AI_DISABLED_NOTICE,
                rule_based_response(question, pdf_text, web_text)
            ),
            ChatMode::NoAi => rule_based_response(question, pdf_text, web_text),
        }
    }

    async fn ai_response(&self, question: &str, pdf_text: &str, web_text: &str) -> String {
        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_message(question, pdf_text, web_text)),
        ];

        match self
            .chat_client
            .complete(&messages, CompletionParams::default())
            .await
        {
            Ok(answer) => answer,
            Err(e) => failure_text(e),
        }
    }

    /// Canned probe used by the connection-test endpoint. The caller decides
    /// success by looking for the expected phrase in the reply.
    pub async fn test_connection(&self) -> Result<String, ChatClientError> {
        let messages = vec![
            ChatMessage::system(
                "You are a helpful assistant. Respond with exactly: 'AI connection successful to DeepSeek'",
            ),
            ChatMessage::user("Test connection"),
        ];
        let params = CompletionParams {
            max_tokens: 50,
            ..CompletionParams::default()
        };
        self.chat_client.complete(&messages, params).await
    }
}

/// Deterministic mapping from typed remote failures to user-facing chat text.
fn failure_text(error: ChatClientError) -> String {
    match error {
        ChatClientError::NotConfigured => {
            "AI mode is not configured. Please check API settings in environment variables."
                .to_string()
        }
        ChatClientError::Timeout => "AI request timed out. Please try again.".to_string(),
        ChatClientError::BadStatus { status, body } => {
            format!("API Error: {} - {}", status, truncate_chars(&body, 200))
        }
        ChatClientError::Transport(msg) | ChatClientError::InvalidResponse(msg) => {
            format!("Connection error: {}", msg)
        }
    }
}

fn count_page_markers(pdf_text: &str) -> usize {
    pdf_text
        .split('\n')
        .filter(|line| line.starts_with(PAGE_MARKER_PREFIX))
        .count()
}

fn build_user_message(question: &str, pdf_text: &str, web_text: &str) -> String {
    let mut context_parts = Vec::new();
    if !pdf_text.is_empty() {
        context_parts.push(format!(
            "PDF Content (partial):\n{}",
            truncate_chars(pdf_text, PDF_CONTEXT_CHARS)
        ));
    }
    if !web_text.is_empty() {
        context_parts.push(format!(
            "Web Content (partial):\n{}",
            truncate_chars(web_text, WEB_CONTEXT_CHARS)
        ));
    }
    let context = context_parts.join("\n\n");

    let mut user_message = format!("Question: {}\n\n", question);

    let mut content_status = Vec::new();
    if !pdf_text.is_empty() {
        content_status.push(format!(
            "PDF: {} pages, {} characters",
            count_page_markers(pdf_text),
            group_thousands(pdf_text.chars().count())
        ));
    }
    if !web_text.is_empty() {
        content_status.push(format!(
            "Web: {} lines, {} characters",
            web_text.split('\n').count(),
            group_thousands(web_text.chars().count())
        ));
    }
    if !content_status.is_empty() {
        user_message.push_str(&format!(
            "Available content: {}\n\n",
            content_status.join(", ")
        ));
    }

    if context.is_empty() {
        user_message.push_str("No content loaded. Please answer this general question:");
    } else {
        user_message.push_str(&format!(
            "Context:\n{}\n\nPlease answer based on this context:",
            context
        ));
    }

    user_message
}

/// Rule-based variant: ordered keyword rules, first match wins, all checks
/// case-insensitive substring matches against the question.
pub fn rule_based_response(question: &str, pdf_text: &str, web_text: &str) -> String {
    let question_lower = question.to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|k| question_lower.contains(k));

    if matches_any(&GREETING_KEYWORDS) {
        return GREETING_RESPONSE.to_string();
    }

    if question_lower.contains("help") {
        return HELP_RESPONSE.to_string();
    }

    let mut info_blocks = Vec::new();

    if !pdf_text.is_empty() && matches_any(&PDF_KEYWORDS) {
        let preview = pdf_text
            .split('\n')
            .filter(|line| !line.starts_with(PAGE_MARKER_PREFIX))
            .map(str::trim)
            .filter(|line| line.chars().count() > 10)
            .take(3)
            .collect::<Vec<_>>()
            .join("\n");

        info_blocks.push("\u{1f4c4} **PDF Information:**".to_string());
        info_blocks.push(format!("- Pages: {}", count_page_markers(pdf_text)));
        info_blocks.push(format!(
            "- Characters: {}",
            group_thousands(pdf_text.chars().count())
        ));
        info_blocks.push(format!("- Preview: {}", truncate_with_ellipsis(&preview, 200)));
    }

    if !web_text.is_empty() && matches_any(&WEB_KEYWORDS) {
        let preview = web_text
            .split('\n')
            .take(3)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        info_blocks.push("\u{1f310} **Website Information:**".to_string());
        info_blocks.push(format!(
            "- Lines extracted: {}",
            web_text.split('\n').count()
        ));
        info_blocks.push(format!(
            "- Characters: {}",
            group_thousands(web_text.chars().count())
        ));
        info_blocks.push(format!("- Preview: {}", truncate_with_ellipsis(&preview, 200)));
    }

    if !info_blocks.is_empty() {
        return info_blocks.join("\n");
    }

    if question_lower.contains("summary") || question_lower.contains("summarize") {
        if !pdf_text.is_empty() {
            return format!(
                "\u{1f4c4} **PDF Summary:**\n{}",
                summarize_document(pdf_text)
            );
        }
        if !web_text.is_empty() {
            return format!("\u{1f310} **Website Summary:**\n{}", summarize_web(web_text));
        }
        return "No content loaded. Please upload a PDF or scrape a website first.".to_string();
    }

    if matches_any(&ANALYZE_KEYWORDS) {
        if pdf_text.is_empty() && web_text.is_empty() {
            return "No content available for analysis. Please upload a PDF or scrape a website first."
                .to_string();
        }

        let (content, label) = if !pdf_text.is_empty() {
            (pdf_text, "PDF")
        } else {
            (web_text, "Website")
        };

        if let Some(analysis) = analyze(content) {
            let mut response = format!("\u{1f4ca} **{} Analysis:**\n", label);
            response.push_str(&format!(
                "- Total lines: {}\n",
                group_thousands(analysis.stats.total_lines)
            ));
            response.push_str(&format!(
                "- Total characters: {}\n",
                group_thousands(analysis.stats.total_characters)
            ));
            response.push_str(&format!(
                "- Total words: {}\n",
                group_thousands(analysis.stats.total_words)
            ));
            response.push_str(&format!(
                "- Average line length: {:.1} characters\n",
                analysis.stats.avg_line_length
            ));
            response.push_str(&format!(
                "- Maximum line length: {} characters\n",
                analysis.stats.max_line_length
            ));
            response.push_str(&format!(
                "- Minimum line length: {} characters\n",
                analysis.stats.min_line_length
            ));
            response.push_str(&format!("- Empty lines: {}\n", analysis.stats.empty_lines));

            if !analysis.top_words.is_empty() {
                response.push_str("\n\u{1f524} **Top 5 Most Frequent Words:**\n");
                for (i, word) in analysis.top_words.iter().take(5).enumerate() {
                    response.push_str(&format!(
                        "{}. '{}' - {} times\n",
                        i + 1,
                        word.word,
                        word.count
                    ));
                }
            }

            return response;
        }
    }

    DEFAULT_RESPONSE.to_string()
}
