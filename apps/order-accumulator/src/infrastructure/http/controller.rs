//! HTTP control surface over the exposure ledger.
//!
//! Axum router exposing the ledger's configuration and contents to
//! operators. Symbol inputs are normalized to upper case before lookup, so
//! lookups are case-insensitive from the caller's perspective.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ledger::ExposureLedger;
use crate::domain::order::Order;
use crate::domain::shared::Symbol;

use super::response::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The shared ledger instance, also mutated by protocol traffic.
    pub ledger: Arc<ExposureLedger>,
    /// Application version.
    pub version: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Create the HTTP router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/exposure/symbol/all", get(get_all_exposures))
        .route("/exposure/symbol/{symbol}", get(get_exposure))
        .route(
            "/exposure/default-max-exposure",
            get(get_default_max_exposure).put(set_default_max_exposure),
        )
        .route("/orders/symbol/all", get(get_all_orders).delete(delete_all_orders))
        .route("/orders/symbol/{symbol}", get(get_orders).delete(delete_orders))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Get the net exposure for one symbol.
async fn get_exposure(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Decimal>, ApiError> {
    let symbol = require_symbol(&symbol)?;
    Ok(Json(state.ledger.exposure(&symbol)))
}

/// Get the net exposure for every known symbol.
async fn get_all_exposures(State(state): State<AppState>) -> Json<HashMap<Symbol, Decimal>> {
    Json(state.ledger.all_exposures())
}

/// Get the current exposure limit.
async fn get_default_max_exposure(State(state): State<AppState>) -> Json<Decimal> {
    Json(state.ledger.max_exposure())
}

/// Replace the exposure limit.
async fn set_default_max_exposure(
    State(state): State<AppState>,
    Json(value): Json<Decimal>,
) -> Result<StatusCode, ApiError> {
    state.ledger.set_max_exposure(value)?;
    tracing::info!(max_exposure = %value, "Exposure limit updated");
    Ok(StatusCode::OK)
}

/// Get the admitted orders for one symbol.
async fn get_orders(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let symbol = require_symbol(&symbol)?;
    Ok(Json(state.ledger.orders(&symbol)))
}

/// Get the admitted orders for every symbol.
async fn get_all_orders(State(state): State<AppState>) -> Json<HashMap<Symbol, Vec<Order>>> {
    Json(state.ledger.all_orders())
}

/// Delete one symbol's orders. Idempotent.
async fn delete_orders(State(state): State<AppState>, Path(symbol): Path<String>) -> StatusCode {
    state.ledger.delete_orders(&Symbol::new(symbol));
    StatusCode::NO_CONTENT
}

/// Delete every symbol's orders. The limit is unaffected.
async fn delete_all_orders(State(state): State<AppState>) -> StatusCode {
    state.ledger.delete_all_orders();
    StatusCode::NO_CONTENT
}

fn require_symbol(raw: &str) -> Result<Symbol, ApiError> {
    let symbol = Symbol::new(raw);
    if symbol.is_blank() {
        return Err(ApiError::BadRequest {
            detail: "The 'symbol' parameter is required".to_string(),
            field_name: "symbol".to_string(),
        });
    }
    Ok(symbol)
}
