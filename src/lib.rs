//! # Borne Locator
//!
//! Locates EV charging stations ("bornes") that are near a point, free at
//! an instant, or both.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Stations, reservations, geographic points and the
//!   read ports the locator depends on
//! - **application**: The station locator and its view records
//! - **infrastructure**: SeaORM persistence, migrations, seeding and an
//!   in-memory store
//! - **interfaces**: Read-only REST API with Swagger documentation
//! - **shared**: Errors and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::{StationLocator, StationView};
pub use domain::{distance_km, DomainError, DomainResult, GeoPoint};

// Re-export database types for easy access
pub use infrastructure::database::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
