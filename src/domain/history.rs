use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ChatMode;

/// One chat exchange as recorded in the session log. The stored response is
/// pre-truncated by the caller; the full text goes only to the client.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub question: String,
    pub mode: ChatMode,
    pub response: String,
}

impl HistoryEntry {
    pub fn new(question: String, mode: ChatMode, response: String) -> Self {
        Self {
            timestamp: Utc::now(),
            question,
            mode,
            response,
        }
    }
}

/// Bounded chat log. Capacity is fixed at startup; pushing past it evicts
/// the oldest entry first.
#[derive(Debug, Clone)]
pub struct ChatHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl ChatHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
