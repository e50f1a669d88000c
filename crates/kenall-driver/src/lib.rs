#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod width;

pub use config::DriverConfig;
pub use driver::{RunStats, normalize_stream, parse_records};
pub use error::DriverError;
