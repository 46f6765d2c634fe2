//! Simulation utilities and trace processing.
//!
//! Provides the trace loader and the sequential predict/update/record loop
//! that drives a predictor over a stream of retired branch events.

pub use self::simulator::Simulation;

/// Trace file loading and parsing.
pub mod loader;

/// The event-processing loop.
pub mod simulator;

/// One retired conditional branch.
///
/// The address is an opaque key identifying the branch instruction; it is
/// never dereferenced, only hashed into table indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchEvent {
    /// Program counter of the branch instruction.
    pub address: u64,
    /// Whether the branch was taken.
    pub taken: bool,
}
