//! Database entities module

pub mod reservation;
pub mod station;

pub use reservation::Entity as Reservation;
pub use station::Entity as Station;
