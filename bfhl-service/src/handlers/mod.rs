//! HTTP handlers for the bfhl service.

pub mod bfhl;
pub mod health;
pub mod metrics;
