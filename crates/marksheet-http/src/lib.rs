//! # Marksheet HTTP Runtime
//!
//! Axum-based HTTP surface for the marksheet result service: the
//! `/api/calculate` endpoint, a health probe, an OpenAPI document, and the
//! static frontend.
//!
//! The runtime is stateless; every request is decoded, handed to the pure
//! calculation core in `marksheet-core`, and serialized back out.

pub mod runtime;

pub use runtime::{ApiError, ConfigError, HttpRuntime, HttpRuntimeConfig};
