use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::settings::{PricingSettings, PricingStrategy, SettingsScope};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/delivery-fees/settings",
        get(get_settings).post(upsert_settings),
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsQuery {
    pub restaurant_id: Option<Uuid>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub strategy: PricingStrategy,
    pub base_fee: f64,
    pub per_km_fee: f64,
    pub min_fee: f64,
    pub max_fee: f64,
    pub free_delivery_threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<Uuid>,
    pub is_default: bool,
}

impl SettingsResponse {
    fn from_settings(
        settings: &PricingSettings,
        restaurant_id: Option<Uuid>,
        is_default: bool,
    ) -> Self {
        Self {
            strategy: settings.strategy,
            base_fee: settings.base_fee,
            per_km_fee: settings.per_km_fee,
            min_fee: settings.min_fee,
            max_fee: settings.max_fee,
            free_delivery_threshold: settings.free_delivery_threshold,
            restaurant_id,
            is_default,
        }
    }
}

async fn get_settings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SettingsQuery>,
) -> Json<SettingsResponse> {
    let scope = SettingsScope::from_restaurant(query.restaurant_id);

    match state.settings.get(&scope) {
        Some(entry) => Json(SettingsResponse::from_settings(
            entry.value(),
            query.restaurant_id,
            false,
        )),
        None => Json(SettingsResponse::from_settings(
            &PricingSettings::defaults(),
            query.restaurant_id,
            true,
        )),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSettingsRequest {
    pub strategy: PricingStrategy,
    pub base_fee: f64,
    pub per_km_fee: f64,
    pub min_fee: f64,
    pub max_fee: f64,
    #[serde(default)]
    pub free_delivery_threshold: f64,
    pub restaurant_id: Option<Uuid>,
}

async fn upsert_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpsertSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    if let Some(id) = payload.restaurant_id {
        if !state.restaurants.contains_key(&id) {
            return Err(AppError::NotFound(format!("restaurant {id} not found")));
        }
    }

    let settings = PricingSettings {
        strategy: payload.strategy,
        base_fee: payload.base_fee,
        per_km_fee: payload.per_km_fee,
        min_fee: payload.min_fee,
        max_fee: payload.max_fee,
        free_delivery_threshold: payload.free_delivery_threshold,
        updated_at: Utc::now(),
    };
    settings.validate()?;

    let scope = SettingsScope::from_restaurant(payload.restaurant_id);
    state.settings.insert(scope, settings.clone());

    tracing::info!(
        strategy = settings.strategy.as_str(),
        restaurant_id = ?payload.restaurant_id,
        "pricing settings updated"
    );

    Ok(Json(SettingsResponse::from_settings(
        &settings,
        payload.restaurant_id,
        false,
    )))
}
