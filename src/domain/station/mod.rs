//! Station aggregate
//!
//! Contains the Station entity, its status, and the read port used by the
//! locator.

pub mod model;
pub mod repository;

pub use model::{Station, StationStatus};
pub use repository::StationLister;
