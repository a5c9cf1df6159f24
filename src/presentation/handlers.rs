// HTTP request handlers
use crate::application::view_session::ViewSession;
use crate::domain::dashboard::FetchLifecycle;
use crate::presentation::app_state::AppState;
use crate::presentation::text_renderer::render_text;
use crate::presentation::view_mapper::PageResponse;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard as JSON for a chart-capable client
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let lifecycle = activate_view(&state).await;
    let body = PageResponse::from_lifecycle(&lifecycle, &state.title);
    (status_for(&lifecycle), Json(body))
}

/// Dashboard rendered as plain text
pub async fn get_dashboard_text(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let lifecycle = activate_view(&state).await;
    (status_for(&lifecycle), render_text(&lifecycle, &state.title))
}

/// Each request is one view activation. If the client goes away the
/// handler future is dropped, and the session with it.
async fn activate_view(state: &AppState) -> FetchLifecycle {
    let mut session = ViewSession::activate(state.dashboard_service.clone());
    match session.settled().await {
        Some(lifecycle) => lifecycle,
        None => {
            // Task ended without publishing (panicked or aborted)
            tracing::error!("Dashboard session ended without a result");
            FetchLifecycle::failed()
        }
    }
}

fn status_for(lifecycle: &FetchLifecycle) -> StatusCode {
    match lifecycle {
        FetchLifecycle::Loading => StatusCode::ACCEPTED,
        FetchLifecycle::Ready(_) => StatusCode::OK,
        FetchLifecycle::Error(_) => StatusCode::BAD_GATEWAY,
    }
}
