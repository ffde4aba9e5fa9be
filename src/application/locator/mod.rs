//! Nearby / free station locator
//!
//! Answers "which stations are within this radius", "which stations are
//! unoccupied at this instant", and both at once, over the station and
//! reservation collections read through their ports.

pub mod dto;
pub mod service;

pub use dto::StationView;
pub use service::{require_instant, StationLocator};
