//! Application layer: use cases over the domain ports

pub mod locator;

pub use locator::{StationLocator, StationView};
