mod analyzer_test;
mod text_format_test;
