#![warn(clippy::pedantic)]

pub mod error;
pub mod line;
pub mod quote_mask;

pub use error::WireError;
pub use line::{join_fields, split_fields};
pub use quote_mask::QuoteMask;
