//! Domain layer: stations, reservations and geographic points.

pub mod geo;
pub mod reservation;
pub mod station;

// Re-export commonly used types
pub use geo::{distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use reservation::{Reservation, ReservationLister, ReservationStatus};
pub use station::{Station, StationLister, StationStatus};

pub use crate::shared::errors::{DomainError, DomainResult};
