use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::geo::Coordinate;
use crate::models::restaurant::Restaurant;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/restaurants", post(create_restaurant).get(list_restaurants))
        .route("/api/restaurants/:id", get(get_restaurant))
}

#[derive(Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

async fn create_restaurant(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> Result<Json<Restaurant>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }

    let restaurant = Restaurant {
        id: Uuid::new_v4(),
        name: payload.name,
        location: Coordinate::new(payload.lat, payload.lng)?,
        created_at: Utc::now(),
    };

    state.restaurants.insert(restaurant.id, restaurant.clone());
    tracing::info!(restaurant = %restaurant.name, "restaurant registered");

    Ok(Json(restaurant))
}

async fn list_restaurants(State(state): State<Arc<AppState>>) -> Json<Vec<Restaurant>> {
    let restaurants = state
        .restaurants
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(restaurants)
}

async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Restaurant>, AppError> {
    let restaurant = state
        .restaurants
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("restaurant {id} not found")))?;

    Ok(Json(restaurant.value().clone()))
}
