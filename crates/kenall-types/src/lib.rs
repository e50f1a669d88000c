#![warn(clippy::pedantic)]

pub mod error;
pub mod flags;
pub mod record;

pub use error::TypeError;
pub use flags::{UpdateReason, UpdateStatus};
pub use record::{COLUMN_COUNT, Record};
