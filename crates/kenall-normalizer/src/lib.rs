#![warn(clippy::pedantic)]

pub mod brackets;
pub mod classifier;
pub mod digits;
pub mod engine;
pub mod error;

mod annotation;

pub use classifier::{Annotation, MAX_FAN_OUT, Unit, classify, normalize_street};
pub use engine::Normalizer;
pub use error::NormalizeError;
