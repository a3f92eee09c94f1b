use chatgenius::application::services::{group_thousands, truncate_chars, truncate_with_ellipsis};

#[test]
fn given_small_numbers_when_grouping_then_no_separator_is_added() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(42), "42");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn given_large_numbers_when_grouping_then_commas_separate_thousands() {
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(12_345), "12,345");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn given_short_text_when_truncating_then_text_is_unchanged() {
    assert_eq!(truncate_chars("hello", 10), "hello");
    assert_eq!(truncate_chars("hello", 5), "hello");
}

#[test]
fn given_long_text_when_truncating_then_exactly_max_chars_remain() {
    let truncated = truncate_chars("hello world", 5);

    assert_eq!(truncated, "hello");
}

#[test]
fn given_multibyte_text_when_truncating_then_count_is_by_chars_not_bytes() {
    let truncated = truncate_chars("àéîõü-rest", 5);

    assert_eq!(truncated, "àéîõü");
}

#[test]
fn given_short_text_when_adding_ellipsis_then_no_suffix_is_added() {
    assert_eq!(truncate_with_ellipsis("short", 10), "short");
    assert_eq!(truncate_with_ellipsis("exact", 5), "exact");
}

#[test]
fn given_long_text_when_adding_ellipsis_then_result_never_exceeds_cap() {
    let long = "x".repeat(600);

    let truncated = truncate_with_ellipsis(&long, 500);

    assert_eq!(truncated.chars().count(), 500);
    assert!(truncated.ends_with("..."));
}
