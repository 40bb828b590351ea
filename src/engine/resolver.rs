use uuid::Uuid;

use crate::engine::pricing::PricingContext;
use crate::error::AppError;
use crate::models::settings::{PricingSettings, SettingsScope};
use crate::state::AppState;

/// Resolves origin, settings, and zones for one quote. This is the only place
/// that reads pricing state; the engine itself works off the snapshot.
pub fn resolve_context(
    state: &AppState,
    restaurant_id: Option<Uuid>,
) -> Result<PricingContext, AppError> {
    let restaurant = match restaurant_id {
        Some(id) => Some(
            state
                .restaurants
                .get(&id)
                .map(|entry| entry.value().clone())
                .ok_or_else(|| AppError::NotFound(format!("restaurant {id} not found")))?,
        ),
        None => None,
    };

    // Explicitly configured store location wins; the restaurant's own
    // coordinates are the fallback origin.
    let store_location = *state
        .store_location
        .read()
        .map_err(|_| AppError::Internal("store location lock poisoned".to_string()))?;
    let origin = store_location.or_else(|| {
        restaurant
            .as_ref()
            .map(|r| r.location)
            .filter(|loc| !loc.is_unset())
    });

    let restaurant_settings = restaurant_id.and_then(|id| {
        state
            .settings
            .get(&SettingsScope::Restaurant(id))
            .map(|entry| entry.value().clone())
    });

    let settings = restaurant_settings
        .clone()
        .or_else(|| {
            state
                .settings
                .get(&SettingsScope::Global)
                .map(|entry| entry.value().clone())
        })
        .unwrap_or_else(PricingSettings::defaults);

    let mut zones: Vec<_> = state
        .zones
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    zones.sort_by(|a, b| a.min_distance_km.total_cmp(&b.min_distance_km));

    Ok(PricingContext {
        origin,
        settings,
        restaurant_settings,
        zones,
    })
}
