use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

pub const DEFAULT_BASE_FEE: f64 = 5.0;
pub const DEFAULT_PER_KM_FEE: f64 = 2.0;
pub const DEFAULT_MIN_FEE: f64 = 3.0;
pub const DEFAULT_MAX_FEE: f64 = 50.0;

/// Who a pricing row belongs to: the platform or a single restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsScope {
    Global,
    Restaurant(Uuid),
}

impl SettingsScope {
    pub fn from_restaurant(restaurant_id: Option<Uuid>) -> Self {
        match restaurant_id {
            Some(id) => SettingsScope::Restaurant(id),
            None => SettingsScope::Global,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingStrategy {
    Fixed,
    PerKm,
    ZoneBased,
    RestaurantCustom,
}

impl PricingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingStrategy::Fixed => "fixed",
            PricingStrategy::PerKm => "per_km",
            PricingStrategy::ZoneBased => "zone_based",
            PricingStrategy::RestaurantCustom => "restaurant_custom",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSettings {
    pub strategy: PricingStrategy,
    pub base_fee: f64,
    pub per_km_fee: f64,
    pub min_fee: f64,
    pub max_fee: f64,
    pub free_delivery_threshold: f64,
    pub updated_at: DateTime<Utc>,
}

impl PricingSettings {
    /// Fallback pricing used when nothing is stored at any scope.
    pub fn defaults() -> Self {
        Self {
            strategy: PricingStrategy::PerKm,
            base_fee: DEFAULT_BASE_FEE,
            per_km_fee: DEFAULT_PER_KM_FEE,
            min_fee: DEFAULT_MIN_FEE,
            max_fee: DEFAULT_MAX_FEE,
            free_delivery_threshold: 0.0,
            updated_at: Utc::now(),
        }
    }

    /// Write-boundary invariants: fees non-negative and finite, max >= min.
    pub fn validate(&self) -> Result<(), AppError> {
        let fees = [
            ("baseFee", self.base_fee),
            ("perKmFee", self.per_km_fee),
            ("minFee", self.min_fee),
            ("maxFee", self.max_fee),
            ("freeDeliveryThreshold", self.free_delivery_threshold),
        ];

        for (name, value) in fees {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::BadRequest(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }

        if self.max_fee < self.min_fee {
            return Err(AppError::BadRequest(
                "maxFee must be greater than or equal to minFee".to_string(),
            ));
        }

        Ok(())
    }
}
