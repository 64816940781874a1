// 🌐 REST API with Axum
// Submit a receipt for scoring, then fetch its points by identifier

use crate::error::{ReceiptError, ReceiptResult};
use crate::receipt::{Points, ReceiptId};
use crate::rules::score;
use crate::schema::parse_receipt;
use crate::store::ScoreStore;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        DefaultBodyLimit, Path, State,
    },
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<ScoreStore>,
}

impl AppState {
    pub fn new(store: Arc<ScoreStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: Points,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub receipts: usize,
}

// ============================================================================
// API Handlers
// ============================================================================

/// POST /receipts/process - Score a receipt and remember its points
///
/// The body is read raw so a missing or wrong `Content-Type` is treated like
/// any other malformed submission. A body that cannot be read at all is
/// invalid too.
async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ReceiptResult<Json<ProcessResponse>> {
    let body = body.map_err(|rejection| {
        debug!(error = %rejection, "receipt body could not be read");
        ReceiptError::InvalidReceipt
    })?;

    let receipt = parse_receipt(&body)?;
    let points = score(&receipt);
    let id = state.store.insert(points);

    info!(receipt_id = %id, points, items = receipt.items.len(), "receipt processed");

    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points - Points for a previously processed receipt
///
/// An id that does not decode to UTF-8 can never have been issued, so it is
/// simply not found.
async fn get_points(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ReceiptResult<Json<PointsResponse>> {
    let Path(id) = id.map_err(|rejection| {
        debug!(error = %rejection, "receipt id could not be decoded");
        ReceiptError::NotFound
    })?;

    let points = state.store.get(&id).inspect_err(|_| {
        debug!(receipt_id = %id, "no receipt for id");
    })?;

    Ok(Json(PointsResponse { points }))
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        receipts: state.store.len(),
    })
}

// ============================================================================
// Router
// ============================================================================

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
