//! HTTP API
//!
//! Endpoints:
//! - POST /analyze - Run one analysis, returns the full report
//! - GET /health - Health check

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::core::analyzer::Analyzer;
use crate::types::{Report, StudentContext};

/// App state: the configured analyzer. Analyses are independent and
/// stateless, so this is the only shared data.
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Analysis request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub student_context: Option<StudentContext>,
}

/// Error body for blocking failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the API router
pub fn create_router(analyzer: Analyzer) -> Router {
    let state = Arc::new(AppState { analyzer });

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Run one analysis
async fn analyze(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Report>, (StatusCode, Json<ErrorResponse>)> {
    let context = req.student_context.unwrap_or_default();

    match state.analyzer.analyze(&req.text, &context).await {
        Ok(report) => Ok(Json(report)),
        // EmptyInput is the only error analyze can return; file-loading
        // errors never reach this surface
        Err(err) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: err.to_string() }),
        )),
    }
}

/// Run the API server
pub async fn run_server(addr: &str, analyzer: Analyzer) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(analyzer);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "scrutineer API listening");
    println!("Scrutineer API running on {}", addr);
    println!("  POST /analyze - Analyze a document");
    println!("  GET  /health  - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
