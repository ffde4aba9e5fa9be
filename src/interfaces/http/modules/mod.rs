pub mod health;
pub mod stations;
