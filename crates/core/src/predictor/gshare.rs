//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the branch address using an
//! XOR hash. This allows the predictor to distinguish the same branch
//! instruction in different execution contexts.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `update()`: O(1)
//! - **Space Complexity:** O(capacity) counters plus one history register
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches or history length mismatched to the pattern

use super::DirectionPredictor;
use crate::config::GShareConfig;
use crate::error::ConfigError;
use crate::tables::{CounterTable, HistoryRegister, IndexStrategy};

/// GShare predictor structure.
#[derive(Debug, Clone)]
pub struct GSharePredictor {
    /// Global history register storing recent branch outcomes.
    history: HistoryRegister,
    /// Pattern history table indexed by `address XOR history`.
    table: CounterTable,
}

impl GSharePredictor {
    /// Creates a new gshare predictor from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero-entry table, an unusable counter
    /// width, or an unusable history width.
    pub fn new(config: &GShareConfig, counter_width: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            history: HistoryRegister::new(config.history_bits)?,
            table: CounterTable::new(
                config.table_entries,
                counter_width,
                IndexStrategy::XorFold,
            )?,
        })
    }

    /// Returns the current global history pattern.
    ///
    /// Exposed for meta-predictors that key their choice table by global
    /// history rather than by address.
    pub fn history(&self) -> u64 {
        self.history.value()
    }
}

impl DirectionPredictor for GSharePredictor {
    /// Predicts from the counter at the XOR-folded index.
    fn predict(&self, address: u64) -> bool {
        self.table.read_with(address, self.history.value())
    }

    /// Trains the counter at the XOR-folded index, then shifts the outcome
    /// into the global history register.
    ///
    /// The table index is computed from the history value as it was before
    /// this branch retired, matching the index the paired `predict` used.
    fn update(&mut self, actual: bool, _predicted: bool, address: u64) {
        self.table.update_with(address, self.history.value(), actual);
        self.history.update(actual);
    }
}
