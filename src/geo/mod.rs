use serde::{Deserialize, Serialize};

use crate::error::AppError;

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A point on Earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, AppError> {
        let coordinate = Self { lat, lng };
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(AppError::InvalidCoordinate(
                "latitude and longitude must be finite numbers".to_string(),
            ));
        }

        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                self.lat
            )));
        }

        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                self.lng
            )));
        }

        Ok(())
    }

    /// (0, 0) is the sentinel for "never configured" origins.
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

/// Great-circle distance in kilometers between two coordinates.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    let haversine = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;
    let central_angle = 2.0 * haversine.sqrt().atan2((1.0 - haversine).sqrt());

    EARTH_RADIUS_KM * central_angle
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
