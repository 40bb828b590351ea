use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// A distance band mapped to a flat delivery fee. The interval is half-open:
/// a distance equal to `max_distance_km` belongs to the next band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    pub id: Uuid,
    pub name: String,
    pub min_distance_km: f64,
    pub max_distance_km: f64,
    pub flat_fee: f64,
    pub estimated_time_label: String,
    pub created_at: DateTime<Utc>,
}

impl DeliveryZone {
    pub fn contains(&self, distance_km: f64) -> bool {
        distance_km >= self.min_distance_km && distance_km < self.max_distance_km
    }

    pub fn overlaps(&self, other: &DeliveryZone) -> bool {
        self.min_distance_km < other.max_distance_km
            && other.min_distance_km < self.max_distance_km
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name cannot be empty".to_string()));
        }

        let bounds = [
            ("minDistanceKm", self.min_distance_km),
            ("maxDistanceKm", self.max_distance_km),
            ("flatFee", self.flat_fee),
        ];
        for (name, value) in bounds {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::BadRequest(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }

        if self.max_distance_km <= self.min_distance_km {
            return Err(AppError::BadRequest(
                "maxDistanceKm must be greater than minDistanceKm".to_string(),
            ));
        }

        Ok(())
    }
}
