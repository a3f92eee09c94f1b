use super::text_format::truncate_with_ellipsis;

const HEAD_TAIL_UNITS: usize = 5;
const SHORT_CAP: usize = 500;
const LONG_CAP: usize = 1000;

/// Crude extractive summary of page-marked document text: sentence units,
/// first five plus last five when the text is long enough.
pub fn summarize_document(text: &str) -> String {
    if text.is_empty() {
        return "No text extracted from PDF.".to_string();
    }

    let flattened = text.replace('\n', " ");
    let sentences: Vec<&str> = flattened.split(". ").collect();

    if sentences.len() <= HEAD_TAIL_UNITS * 2 {
        return truncate_with_ellipsis(text, SHORT_CAP);
    }

    let mut picked: Vec<&str> = sentences[..HEAD_TAIL_UNITS].to_vec();
    picked.extend_from_slice(&sentences[sentences.len() - HEAD_TAIL_UNITS..]);
    let summary = format!("{}.", picked.join(". "));

    truncate_with_ellipsis(&summary, LONG_CAP)
}

/// Same shape for scraped web text, with lines as the unit and a literal
/// "..." line marking the elision.
pub fn summarize_web(text: &str) -> String {
    if text.is_empty() {
        return "No content scraped.".to_string();
    }

    let lines: Vec<&str> = text.split('\n').collect();

    if lines.len() <= HEAD_TAIL_UNITS * 2 {
        return truncate_with_ellipsis(text, SHORT_CAP);
    }

    let mut picked: Vec<&str> = lines[..HEAD_TAIL_UNITS].to_vec();
    picked.push("...");
    picked.extend_from_slice(&lines[lines.len() - HEAD_TAIL_UNITS..]);

    truncate_with_ellipsis(&picked.join("\n"), LONG_CAP)
}
