use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::zone::DeliveryZone;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/delivery-fees/zones", get(list_zones).post(create_zone))
        .route(
            "/api/delivery-fees/zones/:id",
            get(get_zone).put(update_zone).delete(delete_zone),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRequest {
    pub name: String,
    pub min_distance_km: f64,
    pub max_distance_km: f64,
    pub flat_fee: f64,
    #[serde(default)]
    pub estimated_time_label: String,
}

async fn list_zones(State(state): State<Arc<AppState>>) -> Json<Vec<DeliveryZone>> {
    let mut zones: Vec<_> = state
        .zones
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    zones.sort_by(|a, b| a.min_distance_km.total_cmp(&b.min_distance_km));
    Json(zones)
}

async fn get_zone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeliveryZone>, AppError> {
    let zone = state
        .zones
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("zone {id} not found")))?;

    Ok(Json(zone.value().clone()))
}

async fn create_zone(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ZoneRequest>,
) -> Result<Json<DeliveryZone>, AppError> {
    let zone = DeliveryZone {
        id: Uuid::new_v4(),
        name: payload.name,
        min_distance_km: payload.min_distance_km,
        max_distance_km: payload.max_distance_km,
        flat_fee: payload.flat_fee,
        estimated_time_label: payload.estimated_time_label,
        created_at: Utc::now(),
    };

    zone.validate()?;
    reject_overlap(&state, &zone)?;

    state.zones.insert(zone.id, zone.clone());
    tracing::info!(zone = %zone.name, "delivery zone created");

    Ok(Json(zone))
}

async fn update_zone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ZoneRequest>,
) -> Result<Json<DeliveryZone>, AppError> {
    let created_at = state
        .zones
        .get(&id)
        .map(|entry| entry.value().created_at)
        .ok_or_else(|| AppError::NotFound(format!("zone {id} not found")))?;

    let zone = DeliveryZone {
        id,
        name: payload.name,
        min_distance_km: payload.min_distance_km,
        max_distance_km: payload.max_distance_km,
        flat_fee: payload.flat_fee,
        estimated_time_label: payload.estimated_time_label,
        created_at,
    };

    zone.validate()?;
    reject_overlap(&state, &zone)?;

    state.zones.insert(id, zone.clone());
    Ok(Json(zone))
}

async fn delete_zone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .zones
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("zone {id} not found")))?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Distance bands must not intersect; touching edges are fine because the
/// intervals are half-open.
fn reject_overlap(state: &AppState, candidate: &DeliveryZone) -> Result<(), AppError> {
    for entry in state.zones.iter() {
        let existing = entry.value();
        if existing.id != candidate.id && existing.overlaps(candidate) {
            return Err(AppError::Conflict(format!(
                "zone overlaps existing zone \"{}\" ({}-{} km)",
                existing.name, existing.min_distance_km, existing.max_distance_km
            )));
        }
    }

    Ok(())
}
