//! Station view records returned by the locator

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Station;

/// Read-only view of a station, as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StationView {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, example = "48.8566")]
    pub latitude: Decimal,
    #[schema(value_type = String, example = "2.3522")]
    pub longitude: Decimal,
    /// Maximum power in kW
    #[schema(value_type = String, example = "50.0")]
    pub power_kw: Decimal,
    pub instructions: Option<String>,
    pub pedestal: bool,
    /// Active, Inactive, Maintenance or OutOfService
    pub status: String,
    pub place_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub last_maintenance: Option<DateTime<Utc>>,
}

impl From<&Station> for StationView {
    fn from(s: &Station) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            latitude: s.location.latitude,
            longitude: s.location.longitude,
            power_kw: s.power_kw,
            instructions: s.instructions.clone(),
            pedestal: s.pedestal,
            status: s.status.as_str().to_string(),
            place_id: s.place_id,
            created_at: s.created_at,
            last_maintenance: s.last_maintenance,
        }
    }
}

impl From<Station> for StationView {
    fn from(s: Station) -> Self {
        Self::from(&s)
    }
}
