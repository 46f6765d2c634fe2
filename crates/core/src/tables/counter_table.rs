//! Fixed-capacity table of saturating counters.
//!
//! Rows are selected by hashing the key through the table's
//! [`IndexStrategy`] and reducing modulo the capacity. The table never
//! resizes and never rejects a key; two distinct keys that land on the same
//! row share that row's counter.

use crate::error::ConfigError;
use crate::tables::counter::SaturatingCounter;
use crate::tables::index::IndexStrategy;

/// Fixed array of saturating counters addressed by hashed key.
#[derive(Debug, Clone)]
pub struct CounterTable {
    /// Counter storage, length fixed at construction.
    counters: Vec<SaturatingCounter>,
    /// Row selection strategy.
    strategy: IndexStrategy,
}

impl CounterTable {
    /// Creates a table of `capacity` counters of the given bit width.
    ///
    /// Every counter starts in the weakly not-taken state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] for an empty table and
    /// [`ConfigError::CounterWidth`] for an unusable counter width.
    pub fn new(
        capacity: usize,
        width: u32,
        strategy: IndexStrategy,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let counter = SaturatingCounter::new(width)?;
        Ok(Self {
            counters: vec![counter; capacity],
            strategy,
        })
    }

    /// Returns the direction prediction stored for `key`.
    ///
    /// Equivalent to [`read_with`](Self::read_with) with no auxiliary
    /// history; use this for directly keyed tables.
    pub fn read(&self, key: u64) -> bool {
        self.read_with(key, 0)
    }

    /// Returns the direction prediction for `key` under `history`.
    ///
    /// Direct-strategy tables ignore `history`.
    pub fn read_with(&self, key: u64, history: u64) -> bool {
        self.counters[self.index(key, history)].predict()
    }

    /// Trains the counter selected by `key` with the actual outcome.
    ///
    /// A taken outcome increments toward the taken extreme, a not-taken
    /// outcome decrements toward zero. Exactly one counter is mutated.
    pub fn update(&mut self, key: u64, outcome: bool) {
        self.update_with(key, 0, outcome);
    }

    /// Trains the counter selected by `key` under `history`.
    pub fn update_with(&mut self, key: u64, history: u64, outcome: bool) {
        let idx = self.index(key, history);
        if outcome {
            self.counters[idx].increment();
        } else {
            self.counters[idx].decrement();
        }
    }

    /// Returns the number of rows in the table.
    pub fn capacity(&self) -> usize {
        self.counters.len()
    }

    /// Computes the row index for a key; always within `[0, capacity)`.
    fn index(&self, key: u64, history: u64) -> usize {
        self.strategy.index(key, history, self.counters.len())
    }
}
