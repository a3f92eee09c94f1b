use axum::response::Html;

const CHAT_PAGE: &str = include_str!("../assets/chat.html");

/// Serves the embedded chat UI shell.
pub async fn index_handler() -> Html<&'static str> {
    Html(CHAT_PAGE)
}
