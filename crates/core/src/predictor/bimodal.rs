//! Bimodal Branch Predictor.
//!
//! The baseline learning predictor: one counter table keyed directly by
//! branch address, no history. Each row tracks the per-address saturating
//! bias of whichever branches alias onto it.

use super::DirectionPredictor;
use crate::config::BimodalConfig;
use crate::error::ConfigError;
use crate::tables::{CounterTable, IndexStrategy};

/// Bimodal predictor structure.
#[derive(Debug, Clone)]
pub struct BimodalPredictor {
    /// Direction table keyed by address.
    table: CounterTable,
}

impl BimodalPredictor {
    /// Creates a new bimodal predictor from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero-entry table or an unusable
    /// counter width.
    pub fn new(config: &BimodalConfig, counter_width: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            table: CounterTable::new(
                config.table_entries,
                counter_width,
                IndexStrategy::Direct,
            )?,
        })
    }
}

impl DirectionPredictor for BimodalPredictor {
    /// Predicts from the counter the address hashes onto.
    fn predict(&self, address: u64) -> bool {
        self.table.read(address)
    }

    /// Trains the counter the address hashes onto with the actual outcome.
    fn update(&mut self, actual: bool, _predicted: bool, address: u64) {
        self.table.update(address, actual);
    }
}
