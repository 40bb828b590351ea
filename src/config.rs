use std::env;

use crate::error::AppError;
use crate::geo::Coordinate;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub store_lat: f64,
    pub store_lng: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let config = Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            store_lat: parse_or_default("STORE_LAT", 0.0)?,
            store_lng: parse_or_default("STORE_LNG", 0.0)?,
        };

        // A NaN or out-of-range store coordinate is a startup error, not
        // something to let reach the distance math.
        config.store_location()?;

        Ok(config)
    }

    /// Store location seeded from the environment. Exactly (0, 0) means no
    /// origin has been configured yet; quotes degrade to a flat base fee
    /// until an admin sets one. Anything else must be a valid coordinate.
    pub fn store_location(&self) -> Result<Option<Coordinate>, AppError> {
        let location = Coordinate {
            lat: self.store_lat,
            lng: self.store_lng,
        };

        if location.is_unset() {
            return Ok(None);
        }

        location.validate()?;
        Ok(Some(location))
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    fn config(lat: f64, lng: f64) -> Config {
        Config {
            http_port: 3000,
            log_level: "info".to_string(),
            store_lat: lat,
            store_lng: lng,
        }
    }

    #[test]
    fn zero_zero_store_location_is_unconfigured() {
        assert!(config(0.0, 0.0).store_location().unwrap().is_none());
    }

    #[test]
    fn valid_store_location_is_returned() {
        let location = config(15.3694, 44.1910).store_location().unwrap().unwrap();
        assert_eq!(location.lat, 15.3694);
    }

    #[test]
    fn nan_store_latitude_is_rejected() {
        assert!(config(f64::NAN, 44.0).store_location().is_err());
    }

    #[test]
    fn infinite_store_longitude_is_rejected() {
        assert!(config(15.0, f64::INFINITY).store_location().is_err());
    }

    #[test]
    fn out_of_range_store_latitude_is_rejected() {
        assert!(config(95.0, 44.0).store_location().is_err());
    }
}
