//! Route handlers for the web GUI

use axum::{
    extract::{Form, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uicraft_core::{ViewMode, DOWNLOAD_FILE_NAME};

use crate::controller::{PageInput, RefreshOutcome};
use crate::preview;
use crate::state::AppState;
use crate::templates::{self, PageView};

/// Check if the request comes from HTMX (has HX-Request header).
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers.get("HX-Request").is_some()
}

// ============== Page Handlers ==============

/// Main page
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.lock().await;
    Html(templates::page_html(&session, &PageView::default()))
}

/// One refresh cycle: apply widgets, run any pending completion, re-render
pub async fn interact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(input): Form<PageInput>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    state.publish(&session, true);

    let outcome = state.controller().handle(&mut session, &input).await;
    state.publish(&session, false);
    match &outcome {
        RefreshOutcome::Idle => tracing::debug!("refresh idle"),
        RefreshOutcome::Updated => tracing::info!(len = session.markup.len(), "markup updated"),
        RefreshOutcome::Failed(e) => tracing::debug!(level = e.level().as_str(), "refresh failed"),
    }

    let view = PageView {
        prompt_draft: input.prompt.clone(),
        view_mode: input.view_mode(),
    };

    if is_htmx(&headers) {
        Html(templates::app_html(&session, &view))
    } else {
        Html(templates::page_html(&session, &view))
    }
}

#[derive(Deserialize)]
pub struct PreviewQuery {
    pub mode: Option<String>,
}

/// Preview fragment alone
pub async fn preview_panel(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PreviewQuery>,
) -> impl IntoResponse {
    let mode = query
        .mode
        .as_deref()
        .and_then(|mode| mode.parse::<ViewMode>().ok())
        .unwrap_or_default();
    let session = state.session.lock().await;
    Html(preview::render(&session.markup, mode).to_html())
}

/// Current markup as a file. No content when there is nothing to download.
pub async fn download(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.lock().await;
    if !session.has_markup() {
        return StatusCode::NO_CONTENT.into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "text/html".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
            ),
        ],
        session.markup.clone(),
    )
        .into_response()
}

// ============== API Handlers ==============

/// Health check. Answers from the published status, so a running completion never blocks it.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let status = state.status();
    Json(serde_json::json!({
        "status": "healthy",
        "service": "uicraft-web",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs(),
        "provider": state.client.name(),
        "model": state.model,
        "api_key_set": status.api_key_set,
        "has_markup": status.has_markup,
        "pending": status.pending,
        "busy": status.busy,
    }))
}

// ============== Static Assets ==============

/// CSS stylesheet
pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], templates::STYLE_CSS)
}
