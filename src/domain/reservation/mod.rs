//! Reservation aggregate
//!
//! Contains the Reservation entity, its lifecycle status, and the read
//! port used by the locator.

pub mod model;
pub mod repository;

pub use model::{Reservation, ReservationStatus};
pub use repository::ReservationLister;
