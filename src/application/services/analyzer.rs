use std::collections::HashMap;

use serde::Serialize;

pub const TOP_WORD_COUNT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct ContentStats {
    pub total_lines: usize,
    pub total_characters: usize,
    pub total_words: usize,
    pub avg_line_length: f64,
    pub max_line_length: usize,
    pub min_line_length: usize,
    pub empty_lines: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentAnalysis {
    pub stats: ContentStats,
    pub top_words: Vec<WordCount>,
}

/// Aggregate statistics over a text blob. Pure and deterministic; returns
/// None for empty input.
///
/// Ties in the word ranking keep first-encountered order (stable sort over
/// the first-occurrence sequence).
pub fn analyze(content: &str) -> Option<ContentAnalysis> {
    if content.is_empty() {
        return None;
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let words: Vec<&str> = content.split_whitespace().collect();

    let line_lengths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();

    let stats = ContentStats {
        total_lines: lines.len(),
        total_characters: content.chars().count(),
        total_words: words.len(),
        avg_line_length: line_lengths.iter().sum::<usize>() as f64 / lines.len().max(1) as f64,
        max_line_length: line_lengths.iter().copied().max().unwrap_or(0),
        min_line_length: lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.chars().count())
            .min()
            .unwrap_or(0),
        empty_lines: lines.iter().filter(|l| l.trim().is_empty()).count(),
    };

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for word in &words {
        let lower = word.to_lowercase();
        match counts.get_mut(&lower) {
            Some(count) => *count += 1,
            None => {
                counts.insert(lower.clone(), 1);
                first_seen.push(lower);
            }
        }
    }

    let mut top_words: Vec<WordCount> = first_seen
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            WordCount { word, count }
        })
        .collect();
    top_words.sort_by(|a, b| b.count.cmp(&a.count));
    top_words.truncate(TOP_WORD_COUNT);

    Some(ContentAnalysis { stats, top_words })
}
