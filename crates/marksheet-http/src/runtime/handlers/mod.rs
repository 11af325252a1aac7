//! HTTP request handlers.

pub mod calculate;
pub mod health;

pub use calculate::{CalculateRequest, calculate_form, calculate_query, preflight};
pub use health::health_check;
