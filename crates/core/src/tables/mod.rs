//! Hashed, fixed-capacity table primitives.
//!
//! This module contains the leaf state machines every predictor is built
//! from: saturating counters, counter tables, shift-register history
//! tables, and the index hashing strategies that map an arbitrary branch
//! address onto a bounded table row. Aliasing (distinct addresses sharing
//! one row) is expected and intentional; it is how a hardware-sized table
//! models an unbounded address space.

pub use self::counter::SaturatingCounter;
pub use self::counter_table::CounterTable;
pub use self::history::{HistoryRegister, HistoryTable};
pub use self::index::IndexStrategy;

/// Fixed-width saturating counter.
pub mod counter;

/// Fixed-capacity array of saturating counters addressed by hashed key.
pub mod counter_table;

/// Shift-register outcome history, single and tabled.
pub mod history;

/// Index hashing strategies for table lookup.
pub mod index;
