use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, PdfExtractor, WebScraper};
use crate::application::services::{
    analyze, group_thousands, summarize_web, truncate_with_ellipsis,
};
use crate::presentation::state::AppState;

use super::{AnalysisSummary, ErrorResponse};

#[derive(Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub message: String,
    pub details: String,
    pub summary: String,
    pub preview: String,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisSummary>,
}

#[tracing::instrument(skip(state, request), fields(url = %request.url))]
pub async fn scrape_website_handler<P, S, C>(
    State(state): State<AppState<P, S, C>>,
    Json(request): Json<ScrapeRequest>,
) -> impl IntoResponse
where
    P: PdfExtractor + 'static,
    S: WebScraper + 'static,
    C: ChatClient + 'static,
{
    let url = request.url.trim();
    if url.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Please provide a website URL")),
        )
            .into_response();
    }

    let content = match state.web_scraper.scrape(url).await {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, url = %url, "website scrape failed");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Error scraping website: {}", e))),
            )
                .into_response();
        }
    };

    let summary = truncate_with_ellipsis(&summarize_web(&content), 500);
    let preview = truncate_with_ellipsis(&content, 300);
    let analysis = analyze(&content);
    let char_count = content.chars().count();
    let lines = content.split('\n').count();

    tracing::info!(url = %url, chars = char_count, "website scraped");

    {
        let mut session = state.session.write().await;
        session.set_web_text(content);
    }

    (
        StatusCode::OK,
        Json(ScrapeResponse {
            success: true,
            message: "\u{2705} Website scraped successfully!".to_string(),
            details: format!("Extracted {} characters.", group_thousands(char_count)),
            summary,
            preview,
            lines,
            analysis: analysis.as_ref().map(AnalysisSummary::from),
        }),
    )
        .into_response()
}
