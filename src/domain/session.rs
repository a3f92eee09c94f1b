use serde::Serialize;

use super::{ChatHistory, ChatMode, ContentKind, DocumentContent, HistoryEntry};

pub const SESSION_FEATURES: [&str; 4] =
    ["pdf_analysis", "web_scraping", "ai_chat", "data_analysis"];

/// The single process-wide chat session: currently loaded content, active
/// mode, and the bounded history log. One explicit value owned by the
/// application state, guarded by a lock at the call sites.
#[derive(Debug, Clone)]
pub struct Session {
    document: Option<DocumentContent>,
    web_text: Option<String>,
    mode: ChatMode,
    history: ChatHistory,
}

/// Snapshot returned by the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub mode: ChatMode,
    pub pdf_loaded: bool,
    pub pdf_length: usize,
    pub web_loaded: bool,
    pub web_length: usize,
    pub history_count: usize,
    pub ai_enabled: bool,
    pub max_history: usize,
    pub features: Vec<&'static str>,
}

impl Session {
    pub fn new(default_mode: ChatMode, history_limit: usize) -> Self {
        Self {
            document: None,
            web_text: None,
            mode: default_mode,
            history: ChatHistory::with_capacity(history_limit),
        }
    }

    pub fn document(&self) -> Option<&DocumentContent> {
        self.document.as_ref()
    }

    pub fn document_text(&self) -> &str {
        self.document.as_ref().map(|d| d.text.as_str()).unwrap_or("")
    }

    pub fn web_text(&self) -> &str {
        self.web_text.as_deref().unwrap_or("")
    }

    pub fn has_document(&self) -> bool {
        self.document.as_ref().is_some_and(|d| !d.text.is_empty())
    }

    pub fn has_web(&self) -> bool {
        self.web_text.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
    }

    /// Replaces the loaded document wholesale; never a partial update.
    pub fn set_document(&mut self, content: DocumentContent) {
        self.document = Some(content);
    }

    pub fn set_web_text(&mut self, text: String) {
        self.web_text = Some(text);
    }

    pub fn clear(&mut self, kind: ContentKind) {
        if kind.includes_pdf() {
            self.document = None;
        }
        if kind.includes_web() {
            self.web_text = None;
        }
    }

    pub fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn status(&self, ai_enabled: bool) -> SessionStatus {
        SessionStatus {
            mode: self.mode,
            pdf_loaded: self.has_document(),
            pdf_length: self.document_text().chars().count(),
            web_loaded: self.has_web(),
            web_length: self.web_text().chars().count(),
            history_count: self.history.len(),
            ai_enabled,
            max_history: self.history.capacity(),
            features: SESSION_FEATURES.to_vec(),
        }
    }
}
