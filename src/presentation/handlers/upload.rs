use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ChatClient, PdfExtractor, WebScraper};
use crate::application::services::{
    analyze, group_thousands, summarize_document, truncate_with_ellipsis,
};
use crate::presentation::state::AppState;

use super::{AnalysisSummary, ErrorResponse};

const UPLOAD_FIELD: &str = "pdf_file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub details: String,
    pub summary: String,
    pub preview: String,
    pub num_pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisSummary>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_pdf_handler<P, S, C>(
    State(state): State<AppState<P, S, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    P: PdfExtractor + 'static,
    S: WebScraper + 'static,
    C: ChatClient + 'static,
{
    let max_mb = state.settings.upload.max_content_length_mb;

    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some(UPLOAD_FIELD) => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("PDF upload with no file field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new("No file provided")),
                )
                    .into_response();
            }
            Err(e) => return multipart_error(e, max_mb).into_response(),
        }
    };

    let filename = field.file_name().unwrap_or("").to_string();
    if filename.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No file selected")),
        )
            .into_response();
    }
    if !filename.to_lowercase().ends_with(".pdf") {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Please upload a PDF file")),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => return multipart_error(e, max_mb).into_response(),
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "processing PDF upload");

    let content = match state.pdf_extractor.extract(&data).await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "PDF extraction failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Error extracting PDF: {}", e))),
            )
                .into_response();
        }
    };

    let summary = truncate_with_ellipsis(&summarize_document(&content.text), 500);
    let preview = truncate_with_ellipsis(&content.text, 300);
    let analysis = analyze(&content.text);
    let char_count = content.char_count();
    let num_pages = content.num_pages;

    tracing::info!(
        filename = %filename,
        num_pages,
        chars = char_count,
        "PDF uploaded"
    );

    {
        let mut session = state.session.write().await;
        session.set_document(content);
    }

    (
        StatusCode::OK,
        Json(UploadResponse {
            success: true,
            message: "\u{2705} PDF uploaded successfully!".to_string(),
            details: format!(
                "Extracted {} characters from {} pages.",
                group_thousands(char_count),
                num_pages
            ),
            summary,
            preview,
            num_pages,
            analysis: analysis.as_ref().map(AnalysisSummary::from),
        }),
    )
        .into_response()
}

fn multipart_error(e: MultipartError, max_mb: usize) -> (StatusCode, Json<ErrorResponse>) {
    let status = e.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("PDF upload rejected: payload too large");
        (
            status,
            Json(ErrorResponse::new(format!(
                "File too large. Maximum size is {}MB",
                max_mb
            ))),
        )
    } else {
        tracing::error!(error = %e, "failed to read multipart upload");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!("Failed to read upload: {}", e))),
        )
    }
}
