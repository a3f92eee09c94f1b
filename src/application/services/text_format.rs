/// Truncates to at most `max_chars` characters, without a suffix.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Truncates so the result, ellipsis included, never exceeds `max_chars`.
/// Input that already fits is returned unchanged.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut out = truncate_chars(text, max_chars.saturating_sub(3));
        out.push_str("...");
        out
    }
}

/// Formats a count with thousands separators ("1234567" -> "1,234,567").
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
