//! Reservation domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Reservation lifecycle status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Requested by a client, waiting for the owner
    Pending,
    /// Confirmed by the owner; the only status that occupies a station
    Accepted,
    /// Declined by the owner
    Refused,
    /// Cancelled by the client or the owner
    Cancelled,
    /// Charging session finished
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Refused => "Refused",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Pending" => Self::Pending,
            "Accepted" => Self::Accepted,
            "Refused" => Self::Refused,
            "Completed" => Self::Completed,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Time-bounded claim on a station
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i64,
    /// Reserved station (reference only)
    pub station_id: i64,
    /// Client who made the reservation
    pub user_id: Option<i64>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: ReservationStatus,
    /// Amount charged for the session
    pub total_amount: Option<Decimal>,
    /// When the owner accepted or refused
    pub validated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn new(
        id: i64,
        station_id: i64,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            station_id,
            user_id: None,
            starts_at,
            ends_at,
            status: ReservationStatus::Pending,
            total_amount: None,
            validated_at: None,
        }
    }

    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.status == ReservationStatus::Accepted
    }

    /// `starts_at < at < ends_at`; both boundary instants are outside.
    pub fn strictly_contains(&self, at: DateTime<Utc>) -> bool {
        self.starts_at < at && at < self.ends_at
    }

    /// Whether this reservation makes its station occupied at `at`.
    pub fn occupies_at(&self, at: DateTime<Utc>) -> bool {
        self.is_accepted() && self.strictly_contains(at)
    }
}

// ── Tests ──────────────────────────────────────────────────────
