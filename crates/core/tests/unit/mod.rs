//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of the
//! prediction engine. It organizes tests for the table primitives, the
//! predictors built on them, and the surrounding simulation machinery.

/// Unit tests for configuration defaults and JSON deserialization.
pub mod config;

/// Unit tests for the direction predictors.
///
/// Covers predict/update semantics for the static, bimodal, gshare,
/// local, and tournament predictors, including meta-selection
/// convergence.
pub mod predictors;



/// Unit tests for the table primitives.
///
/// This module includes tests for saturating counters, counter tables,
/// history registers, and index hashing.
pub mod tables;
