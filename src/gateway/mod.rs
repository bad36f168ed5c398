//! Web gateway serving the dashboard page and its JSON views.

mod render;
mod server;
pub mod types;

pub use render::render_page;
pub use server::DashboardServer;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::dashboard::Dashboard;
use crate::error::RenderError;
use crate::llm::AiClient;
use types::{DashboardSnapshot, HealthResponse, StatusResponse};

/// Read-only state shared by all handlers. Built once before serving.
pub struct GatewayState {
    ai: AiClient,
    dashboard: Dashboard,
    page: String,
}

impl GatewayState {
    /// Build the dashboard for `ai` and pre-render the page.
    pub fn new(ai: AiClient) -> Result<Self, RenderError> {
        let dashboard = Dashboard::build(&ai);
        let page = render_page(&dashboard)?;
        Ok(Self {
            ai,
            dashboard,
            page,
        })
    }

    pub fn page(&self) -> &str {
        &self.page
    }
}

/// Gateway routes with state applied.
pub fn routes(state: Arc<GatewayState>) -> Router {
    let api = Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler));

    Router::new()
        .route("/", get(index_handler))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler(State(state): State<Arc<GatewayState>>) -> Html<String> {
    Html(state.page.clone())
}

async fn dashboard_handler(State(state): State<Arc<GatewayState>>) -> Response {
    Json(DashboardSnapshot {
        dashboard: &state.dashboard,
        generated_at: chrono::Utc::now(),
    })
    .into_response()
}

async fn status_handler(State(state): State<Arc<GatewayState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ai_client: state.ai.status_label(),
        model: state.ai.client().map(|c| c.model_name().to_string()),
        endpoint: state.ai.client().map(|c| c.base_url().to_string()),
        error: state.ai.error().map(|e| e.to_string()),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
