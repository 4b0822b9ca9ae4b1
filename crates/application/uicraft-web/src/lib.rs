//! uicraft Web GUI
//!
//! Describe a UI in plain language, get HTML back from the hosted model,
//! edit it by hand, preview it as desktop or phone, download it.
//!
//! Server-rendered HTML with HTMX: every interaction posts the whole form,
//! runs one controller cycle and swaps in the re-rendered page.

pub mod alert;
pub mod controller;
pub mod handlers;
pub mod preview;
pub mod routes;
pub mod state;
pub mod templates;

#[cfg(test)]
pub(crate) mod testing;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use state::{AppState, SessionStatus};

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/interact", post(handlers::interact))
        .route("/preview", get(handlers::preview_panel))
        .route("/download", get(handlers::download))
        .route("/api/health", get(handlers::health))
        .route("/static/style.css", get(handlers::style_css))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server
pub async fn serve(state: Arc<AppState>, addr: &str) -> std::io::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("uicraft listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
