//! Station (borne) domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::geo::GeoPoint;

/// Operational state of a station as recorded by its owner
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StationStatus {
    /// In service
    #[default]
    Active,
    /// Switched off by the owner
    Inactive,
    /// Temporarily down for maintenance
    Maintenance,
    /// Broken, waiting for repair
    OutOfService,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Maintenance => "Maintenance",
            Self::OutOfService => "OutOfService",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Active" => Self::Active,
            "Inactive" => Self::Inactive,
            "Maintenance" => Self::Maintenance,
            _ => Self::OutOfService,
        }
    }
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Charging station
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Unique station number
    pub id: i64,
    pub name: String,
    /// Fixed location of the station
    pub location: GeoPoint,
    /// Maximum power in kW
    pub power_kw: Decimal,
    /// Access instructions shown to drivers
    pub instructions: Option<String>,
    /// Floor-standing unit (as opposed to wall-mounted)
    pub pedestal: bool,
    pub status: StationStatus,
    /// Place (lieu) the station belongs to
    pub place_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub last_maintenance: Option<DateTime<Utc>>,
}

impl Station {
    pub fn new(id: i64, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            power_kw: Decimal::ZERO,
            instructions: None,
            pedestal: false,
            status: StationStatus::Active,
            place_id: None,
            created_at: Utc::now(),
            last_maintenance: None,
        }
    }

    pub fn with_power(mut self, power_kw: Decimal) -> Self {
        self.power_kw = power_kw;
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == StationStatus::Active
    }
}
