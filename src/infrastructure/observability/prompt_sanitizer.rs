const MAX_VISIBLE_CHARS: usize = 100;

/// Sanitizes a chat question for safe logging: bounds the visible length and
/// redacts credential-looking fragments.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let bounded = if trimmed.chars().count() > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, trimmed.chars().count())
    } else {
        trimmed.to_string()
    };

    redact_sensitive(&bounded)
}

fn redact_sensitive(text: &str) -> String {
    let markers = ["Bearer ", "api_key=", "password=", "secret=", "token="];

    let mut result = text.to_string();
    for marker in markers {
        if let Some(start) = result.find(marker) {
            let value_start = start + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
        }
    }

    result
}
