//! Database repository implementations
//!
//! SeaORM adapters for the station and reservation read ports.

pub mod reservation_repository;
pub mod station_repository;

pub use reservation_repository::SeaOrmReservationRepository;
pub use station_repository::SeaOrmStationRepository;

use crate::domain::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}
