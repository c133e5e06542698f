//! Crate-level accuracy tests.
//!
//! - `scenarios.rs`: worked examples through [`crate::AccuracyFormulae`]
//! - `properties.rs`: proptest bounds and monotonicity checks
//! - `concurrency.rs`: parallel evaluation with per-thread randomness
//! - `helpers.rs`: snapshot fixtures and request builders

pub(crate) mod helpers;
mod properties;
