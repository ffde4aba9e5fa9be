//! Interface adapters
//!
//! - `http`: read-only REST API with Swagger documentation

pub mod http;
