//! Error definitions for predictor construction and trace loading.
//!
//! Two failure classes exist. Construction problems (`ConfigError`) are fatal
//! and surface before any branch event is processed. Trace problems
//! (`TraceError`) surface while reading an input trace. Every per-event
//! operation (`predict`, `update`, `record`) is total over valid inputs and
//! has no error path.

use thiserror::Error;

/// Fatal configuration errors raised when a predictor is constructed.
///
/// All table capacities and register widths are validated up front so that
/// the event-processing loop itself can never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A table was configured with zero entries.
    ///
    /// Every table index is computed modulo the capacity, so a capacity of
    /// zero has no valid index.
    #[error("table capacity must be greater than zero")]
    ZeroCapacity,

    /// A saturating counter was configured with an unusable bit width.
    ///
    /// Valid widths are 1 through 64 bits; the associated value is the
    /// rejected width.
    #[error("counter width must be within 1..=64 bits, got {0}")]
    CounterWidth(u32),

    /// A history register was configured with an unusable bit width.
    ///
    /// Valid widths are 1 through 64 bits; the associated value is the
    /// rejected width.
    #[error("history width must be within 1..=64 bits, got {0}")]
    HistoryWidth(u32),
}

/// Errors raised while reading a branch trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be read.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A trace line did not parse as `<address> <outcome>`.
    ///
    /// Carries the 1-based line number and the offending text.
    #[error("line {line}: malformed branch event: {text:?}")]
    Malformed {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line text.
        text: String,
    },
}
