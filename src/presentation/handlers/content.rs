use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, PdfExtractor, WebScraper};
use crate::domain::ContentKind;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ClearContentRequest {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

#[derive(Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub message: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn clear_content_handler<P, S, C>(
    State(state): State<AppState<P, S, C>>,
    Json(request): Json<ClearContentRequest>,
) -> impl IntoResponse
where
    P: PdfExtractor + 'static,
    S: WebScraper + 'static,
    C: ChatClient + 'static,
{
    let requested = request.content_type.unwrap_or_else(|| "all".to_string());

    let message = match ContentKind::from_str(&requested) {
        Some(kind) => {
            let mut session = state.session.write().await;
            session.clear(kind);

            let mut parts = Vec::new();
            if kind.includes_pdf() {
                parts.push("PDF content cleared.");
            }
            if kind.includes_web() {
                parts.push("Web content cleared.");
            }
            parts.join(" ")
        }
        None => "No content to clear".to_string(),
    };

    tracing::info!(content_type = %requested, "content cleared");

    (
        StatusCode::OK,
        Json(SimpleResponse {
            success: true,
            message,
        }),
    )
}

pub async fn status_handler<P, S, C>(State(state): State<AppState<P, S, C>>) -> impl IntoResponse
where
    P: PdfExtractor + 'static,
    S: WebScraper + 'static,
    C: ChatClient + 'static,
{
    let session = state.session.read().await;
    let status = session.status(state.settings.chat.enable_ai_mode);
    (StatusCode::OK, Json(status))
}

#[tracing::instrument(skip(state))]
pub async fn clear_history_handler<P, S, C>(
    State(state): State<AppState<P, S, C>>,
) -> impl IntoResponse
where
    P: PdfExtractor + 'static,
    S: WebScraper + 'static,
    C: ChatClient + 'static,
{
    state.session.write().await.clear_history();
    tracing::info!("chat history cleared");

    (
        StatusCode::OK,
        Json(SimpleResponse {
            success: true,
            message: "Chat history cleared".to_string(),
        }),
    )
}
