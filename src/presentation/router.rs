use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ChatClient, PdfExtractor, WebScraper};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    chat_handler, clear_content_handler, clear_history_handler, health_handler, index_handler,
    scrape_website_handler, set_mode_handler, status_handler, test_ai_handler, upload_pdf_handler,
    ErrorResponse,
};
use crate::presentation::state::AppState;

pub fn create_router<P, S, C>(state: AppState<P, S, C>) -> Router
where
    P: PdfExtractor + 'static,
    S: WebScraper + 'static,
    C: ChatClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_body_bytes = state.settings.upload.max_body_bytes();

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/upload_pdf", post(upload_pdf_handler::<P, S, C>))
        .route("/api/scrape_website", post(scrape_website_handler::<P, S, C>))
        .route("/api/chat", post(chat_handler::<P, S, C>))
        .route("/api/set_mode", post(set_mode_handler::<P, S, C>))
        .route("/api/clear_content", post(clear_content_handler::<P, S, C>))
        .route("/api/get_status", get(status_handler::<P, S, C>))
        .route("/api/clear_history", post(clear_history_handler::<P, S, C>))
        .route("/api/test_ai", get(test_ai_handler::<P, S, C>))
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Resource not found")),
    )
}
