use chatgenius::application::services::analyze;

#[test]
fn given_empty_input_when_analyzing_then_returns_none() {
    assert!(analyze("").is_none());
}

#[test]
fn given_text_when_analyzing_then_word_total_matches_whitespace_split() {
    let text = "alpha beta gamma\ndelta epsilon\n\nzeta";
    let analysis = analyze(text).unwrap();

    assert_eq!(analysis.stats.total_words, 6);
    assert_eq!(
        analysis.stats.total_words,
        text.split_whitespace().count()
    );
}

#[test]
fn given_text_when_analyzing_then_frequency_counts_sum_to_total_words() {
    let text = "the cat sat on the mat\nthe cat came back";
    let analysis = analyze(text).unwrap();

    let frequency_sum: usize = analysis.top_words.iter().map(|w| w.count).sum();
    assert_eq!(frequency_sum, analysis.stats.total_words);
}

#[test]
fn given_mixed_case_words_when_analyzing_then_counts_are_case_folded() {
    let analysis = analyze("Rust rust RUST go Go").unwrap();

    assert_eq!(analysis.top_words[0].word, "rust");
    assert_eq!(analysis.top_words[0].count, 3);
    assert_eq!(analysis.top_words[1].word, "go");
    assert_eq!(analysis.top_words[1].count, 2);
}

#[test]
fn given_tied_frequencies_when_ranking_then_first_encountered_wins() {
    let analysis = analyze("zebra apple zebra apple mango").unwrap();

    let words: Vec<&str> = analysis.top_words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["zebra", "apple", "mango"]);
}

#[test]
fn given_many_distinct_words_when_ranking_then_at_most_ten_are_kept() {
    let text = (0..25).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let analysis = analyze(&text).unwrap();

    assert_eq!(analysis.top_words.len(), 10);
}

#[test]
fn given_blank_and_full_lines_when_analyzing_then_line_stats_are_exact() {
    let text = "abcd\n\nab\n   \nabcdef";
    let analysis = analyze(text).unwrap();

    assert_eq!(analysis.stats.total_lines, 5);
    assert_eq!(analysis.stats.empty_lines, 2);
    assert_eq!(analysis.stats.max_line_length, 6);
    // min over non-blank lines only
    assert_eq!(analysis.stats.min_line_length, 2);
    assert_eq!(analysis.stats.total_characters, text.chars().count());
}

#[test]
fn given_all_blank_lines_when_analyzing_then_min_line_length_is_zero() {
    let analysis = analyze("\n  \n").unwrap();

    assert_eq!(analysis.stats.min_line_length, 0);
    assert_eq!(analysis.stats.total_words, 0);
    assert!(analysis.top_words.is_empty());
}

#[test]
fn given_same_input_when_analyzing_twice_then_results_are_identical() {
    let text = "one two two three three three";
    let first = analyze(text).unwrap();
    let second = analyze(text).unwrap();

    let a: Vec<(&str, usize)> = first
        .top_words
        .iter()
        .map(|w| (w.word.as_str(), w.count))
        .collect();
    let b: Vec<(&str, usize)> = second
        .top_words
        .iter()
        .map(|w| (w.word.as_str(), w.count))
        .collect();
    assert_eq!(a, b);
}
