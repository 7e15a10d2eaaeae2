//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to implement use cases.

#[cfg(feature = "parallel")]
pub mod batch;
pub mod summary;
