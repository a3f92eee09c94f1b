use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, PdfExtractor, WebScraper};
use crate::domain::ChatMode;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct SetModeRequest {
    pub mode: Option<String>,
}

#[derive(Serialize)]
pub struct SetModeResponse {
    pub success: bool,
    pub message: String,
    pub mode: ChatMode,
}

/// Rejecting an AI request while AI is disabled reports the forced fallback
/// mode alongside the error.
#[derive(Serialize)]
pub struct ModeRejectedResponse {
    pub error: String,
    pub mode: ChatMode,
}

#[tracing::instrument(skip(state, request))]
pub async fn set_mode_handler<P, S, C>(
    State(state): State<AppState<P, S, C>>,
    Json(request): Json<SetModeRequest>,
) -> impl IntoResponse
where
    P: PdfExtractor + 'static,
    S: WebScraper + 'static,
    C: ChatClient + 'static,
{
    let requested = request
        .mode
        .unwrap_or_else(|| state.settings.chat.default_mode.as_str().to_string());

    let mode = match ChatMode::try_from(requested.as_str()) {
        Ok(m) => m,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid mode")),
            )
                .into_response();
        }
    };

    if mode == ChatMode::Ai && !state.settings.chat.enable_ai_mode {
        tracing::warn!("AI mode requested but disabled in configuration");
        return (
            StatusCode::BAD_REQUEST,
            Json(ModeRejectedResponse {
                error: "AI mode is disabled in configuration".to_string(),
                mode: ChatMode::NoAi,
            }),
        )
            .into_response();
    }

    state.session.write().await.set_mode(mode);
    tracing::info!(mode = %mode, "chat mode changed");

    (
        StatusCode::OK,
        Json(SetModeResponse {
            success: true,
            message: format!("Mode switched to {}", mode.label()),
            mode,
        }),
    )
        .into_response()
}
