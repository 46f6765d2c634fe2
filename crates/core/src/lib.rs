//! Trace-driven branch predictor simulation library.
//!
//! This crate implements hashed, fixed-capacity branch direction predictors with the following:
//! 1. **Tables:** Saturating counters, counter tables, shift-register history tables, and index hashing.
//! 2. **Predictors:** Static, bimodal, gshare, local-history, and tournament (hybrid) predictors.
//! 3. **Statistics:** Outcome accumulation and correctness reporting per simulation run.
//! 4. **Simulation:** Trace loading and the sequential predict/update/record loop.

/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// Error types raised at construction and trace loading.
pub mod error;
/// Branch direction predictors and their common interface.
pub mod predictor;
/// Trace loading and the event-processing loop.
pub mod sim;
/// Outcome accumulation and correctness reporting.
pub mod stats;
/// Table primitives (saturating counters, history registers, index hashing).
pub mod tables;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Statically dispatched predictor; construct with `PredictorDispatch::new`.
pub use crate::predictor::PredictorDispatch;
/// Trace-driven simulation loop; owns a predictor and an accumulator.
pub use crate::sim::Simulation;
/// Per-run outcome counters and correctness reporting.
pub use crate::stats::OutcomeAccumulator;
