//! HTTP transport over the compliance engine.
//!
//! Routes:
//! - `GET /health`
//! - `GET /transactions` lists the ledger
//! - `POST /process-transaction` runs the primary path; rejections answer 403

use crate::application::engine::{ComplianceEngine, Outcome};
use crate::domain::ledger::LedgerRecord;
use crate::domain::transaction::TransactionRequest;
use crate::error::ComplianceError;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

type SharedEngine = Arc<ComplianceEngine>;

/// Builds the router. CORS is permissive.
pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/transactions", get(list_transactions))
        .route("/process-transaction", post(process_transaction))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

/// Serves the router on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, engine: SharedEngine) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "HTTP server listening");
    }
    axum::serve(listener, router(engine)).await
}

/// Infrastructure failure surfaced to HTTP callers as a 500.
struct ApiError(ComplianceError);

impl From<ComplianceError> for ApiError {
    fn from(err: ComplianceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Failed to process transaction: {}", self.0) })),
        )
            .into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_transactions(
    State(engine): State<SharedEngine>,
) -> Result<Json<Vec<LedgerRecord>>, ApiError> {
    let entries = engine.transactions().await?;
    Ok(Json(entries.iter().map(LedgerRecord::from).collect()))
}

async fn process_transaction(
    State(engine): State<SharedEngine>,
    Json(request): Json<TransactionRequest>,
) -> Result<Response, ApiError> {
    let response = match engine.process_transaction(request).await? {
        Outcome::Accepted(entry) => (StatusCode::OK, Json(entry.to_record())).into_response(),
        Outcome::Rejected(reason) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": reason.description(), "reason": reason })),
        )
            .into_response(),
    };
    Ok(response)
}
