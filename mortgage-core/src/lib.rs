pub mod calculations;
pub mod engine;
pub mod models;

pub use engine::{Phase, QuoteEngine};
pub use models::*;
