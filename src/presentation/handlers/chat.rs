use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, PdfExtractor, WebScraper};
use crate::application::services::truncate_with_ellipsis;
use crate::domain::{ChatMode, HistoryEntry};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
    pub mode: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub mode: ChatMode,
    pub has_pdf: bool,
    pub has_web: bool,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<P, S, C>(
    State(state): State<AppState<P, S, C>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    P: PdfExtractor + 'static,
    S: WebScraper + 'static,
    C: ChatClient + 'static,
{
    let question = request.question.trim().to_string();
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Please enter a question")),
        )
            .into_response();
    }

    // Unknown mode strings fall back to the rule-based path rather than
    // erroring, matching the permissive contract of this endpoint.
    let (pdf_text, web_text, mode) = {
        let session = state.session.read().await;
        let mode = request
            .mode
            .as_deref()
            .and_then(|m| ChatMode::try_from(m).ok())
            .unwrap_or_else(|| {
                if request.mode.is_some() {
                    ChatMode::NoAi
                } else {
                    session.mode()
                }
            });
        (
            session.document_text().to_string(),
            session.web_text().to_string(),
            mode,
        )
    };

    tracing::debug!(
        mode = %mode,
        question = %sanitize_prompt(&question),
        "processing chat request"
    );

    let response = state
        .responder
        .respond(&question, mode, &pdf_text, &web_text)
        .await;

    let (has_pdf, has_web) = {
        let mut session = state.session.write().await;
        session.push_history(HistoryEntry::new(
            question,
            mode,
            truncate_with_ellipsis(&response, 500),
        ));
        (session.has_document(), session.has_web())
    };

    (
        StatusCode::OK,
        Json(ChatResponse {
            success: true,
            response,
            mode,
            has_pdf,
            has_web,
        }),
    )
        .into_response()
}
