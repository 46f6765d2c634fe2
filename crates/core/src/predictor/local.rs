//! Local History Branch Predictor.
//!
//! Tracks each branch's own recent outcome pattern in a per-address history
//! table, then predicts from a shared counter table keyed by that pattern.
//! Captures per-branch recurring behavior (loop trip counts, periodic
//! conditions) that a single global history cannot.

use super::DirectionPredictor;
use crate::config::LocalConfig;
use crate::error::ConfigError;
use crate::tables::{CounterTable, HistoryTable, IndexStrategy};

/// Local history predictor structure.
#[derive(Debug, Clone)]
pub struct LocalPredictor {
    /// Per-address history registers.
    histories: HistoryTable,
    /// Counter table indexed by history pattern.
    table: CounterTable,
}

impl LocalPredictor {
    /// Creates a new local history predictor from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero-entry table, an unusable counter
    /// width, or an unusable history width.
    pub fn new(config: &LocalConfig, counter_width: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            histories: HistoryTable::new(config.history_entries, config.history_bits)?,
            table: CounterTable::new(
                config.pattern_entries,
                counter_width,
                IndexStrategy::Direct,
            )?,
        })
    }
}

impl DirectionPredictor for LocalPredictor {
    /// Predicts from the counter keyed by the address's history pattern.
    fn predict(&self, address: u64) -> bool {
        self.table.read(self.histories.get(address))
    }

    /// Trains the counter keyed by the pre-update pattern, then shifts the
    /// outcome into the address's history register.
    ///
    /// The pattern is read before the history shift so training lands on
    /// the same row the paired `predict` consulted.
    fn update(&mut self, actual: bool, _predicted: bool, address: u64) {
        let pattern = self.histories.get(address);
        self.table.update(pattern, actual);
        self.histories.update(address, actual);
    }
}
