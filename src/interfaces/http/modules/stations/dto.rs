//! Station query DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

/// `GET /api/v1/stations/nearby` query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQuery {
    /// Latitude of the search center, in degrees
    #[param(value_type = Option<String>, example = "48.8566")]
    pub latitude: Option<Decimal>,
    /// Longitude of the search center, in degrees
    #[param(value_type = Option<String>, example = "2.3522")]
    pub longitude: Option<Decimal>,
    /// Search radius in km. Defaults to the configured radius
    pub radius_km: Option<f64>,
}

/// `GET /api/v1/stations/free` query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FreeQuery {
    /// Instant to check, RFC 3339 (e.g. `2025-06-01T10:00:00Z`)
    pub at: Option<DateTime<Utc>>,
}

/// `GET /api/v1/stations/free-nearby` query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FreeNearbyQuery {
    #[param(value_type = Option<String>, example = "48.8566")]
    pub latitude: Option<Decimal>,
    #[param(value_type = Option<String>, example = "2.3522")]
    pub longitude: Option<Decimal>,
    pub radius_km: Option<f64>,
    pub at: Option<DateTime<Utc>>,
}
