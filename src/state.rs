use std::sync::RwLock;

use dashmap::DashMap;
use uuid::Uuid;

use crate::geo::Coordinate;
use crate::models::restaurant::Restaurant;
use crate::models::settings::{PricingSettings, SettingsScope};
use crate::models::zone::DeliveryZone;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub settings: DashMap<SettingsScope, PricingSettings>,
    pub zones: DashMap<Uuid, DeliveryZone>,
    pub restaurants: DashMap<Uuid, Restaurant>,
    pub store_location: RwLock<Option<Coordinate>>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(store_location: Option<Coordinate>) -> Self {
        Self {
            settings: DashMap::new(),
            zones: DashMap::new(),
            restaurants: DashMap::new(),
            store_location: RwLock::new(store_location),
            metrics: Metrics::new(),
        }
    }
}
