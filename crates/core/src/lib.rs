pub mod board;
pub mod coercion;
pub mod error;
pub mod types;
