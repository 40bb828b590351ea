use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::eta::estimated_time_label;
use crate::engine::pricing::quote_fee;
use crate::engine::resolver::resolve_context;
use crate::error::AppError;
use crate::geo::{haversine_km, round2, Coordinate};
use crate::models::quote::FeeBreakdown;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/delivery-fees/calculate", post(calculate))
        .route("/api/delivery-fees/distance", post(distance))
        .route(
            "/api/delivery-fees/store-location",
            get(get_store_location).put(put_store_location),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub customer_lat: f64,
    pub customer_lng: f64,
    pub restaurant_id: Option<Uuid>,
    #[serde(default)]
    pub order_subtotal: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub success: bool,
    pub fee: f64,
    pub distance: f64,
    pub estimated_time: String,
    pub fee_breakdown: FeeBreakdown,
    pub is_free_delivery: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_delivery_reason: Option<String>,
}

async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    let customer = Coordinate::new(payload.customer_lat, payload.customer_lng)?;

    if !payload.order_subtotal.is_finite() || payload.order_subtotal < 0.0 {
        return Err(AppError::BadRequest(
            "orderSubtotal must be a non-negative number".to_string(),
        ));
    }

    let ctx = resolve_context(&state, payload.restaurant_id)?;
    let quote = quote_fee(&ctx, &customer, payload.order_subtotal);

    state
        .metrics
        .quotes_total
        .with_label_values(&[ctx.settings.strategy.as_str()])
        .inc();
    state.metrics.quote_distance_km.observe(quote.distance_km);
    state.metrics.quote_fee.observe(quote.fee);
    if quote.is_free_delivery {
        state.metrics.free_deliveries_total.inc();
    }

    tracing::info!(
        strategy = ctx.settings.strategy.as_str(),
        distance_km = quote.distance_km,
        fee = quote.fee,
        free_delivery = quote.is_free_delivery,
        "fee quoted"
    );

    Ok(Json(CalculateResponse {
        success: true,
        fee: quote.fee,
        distance: quote.distance_km,
        estimated_time: quote.estimated_time_label,
        fee_breakdown: quote.breakdown,
        is_free_delivery: quote.is_free_delivery,
        free_delivery_reason: quote.free_delivery_reason,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceRequest {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResponse {
    pub success: bool,
    pub distance: f64,
    pub unit: &'static str,
    pub estimated_time: String,
}

async fn distance(
    Json(payload): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    let from = Coordinate::new(payload.from_lat, payload.from_lng)?;
    let to = Coordinate::new(payload.to_lat, payload.to_lng)?;

    let distance = round2(haversine_km(&from, &to));

    Ok(Json(DistanceResponse {
        success: true,
        distance,
        unit: "km",
        estimated_time: estimated_time_label(distance),
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLocationResponse {
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}

#[derive(Deserialize)]
pub struct PutStoreLocationRequest {
    pub lat: f64,
    pub lng: f64,
}

async fn get_store_location(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StoreLocationResponse>, AppError> {
    let location = *state
        .store_location
        .read()
        .map_err(|_| AppError::Internal("store location lock poisoned".to_string()))?;

    Ok(Json(StoreLocationResponse {
        configured: location.is_some(),
        location,
    }))
}

async fn put_store_location(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PutStoreLocationRequest>,
) -> Result<Json<StoreLocationResponse>, AppError> {
    let location = Coordinate::new(payload.lat, payload.lng)?;

    let mut slot = state
        .store_location
        .write()
        .map_err(|_| AppError::Internal("store location lock poisoned".to_string()))?;
    // (0, 0) unconfigures the origin again.
    *slot = if location.is_unset() {
        None
    } else {
        Some(location)
    };

    Ok(Json(StoreLocationResponse {
        configured: slot.is_some(),
        location: *slot,
    }))
}
