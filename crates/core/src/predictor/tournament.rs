//! Tournament Branch Predictor.
//!
//! A hybrid predictor that employs a meta-predictor (choice table) to select
//! between a global (gshare) component and a local-history component. The
//! choice table learns, per address, which component has been the more
//! reliable one and routes the final prediction accordingly.

use super::DirectionPredictor;
use crate::config::{GShareConfig, LocalConfig, TournamentConfig};
use crate::error::ConfigError;
use crate::predictor::gshare::GSharePredictor;
use crate::predictor::local::LocalPredictor;
use crate::tables::{CounterTable, IndexStrategy};

/// Tournament predictor structure.
#[derive(Debug, Clone)]
pub struct TournamentPredictor {
    /// Global history component.
    global: GSharePredictor,
    /// Local history component.
    local: LocalPredictor,
    /// Choice table keyed by address.
    /// Selects the local component in the taken half of each counter's
    /// range and the global component in the not-taken half.
    choice: CounterTable,
}

impl TournamentPredictor {
    /// Creates a new tournament predictor from the component configurations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any component table capacity is zero or
    /// any bit width falls outside `1..=64`.
    pub fn new(
        gshare: &GShareConfig,
        local: &LocalConfig,
        tournament: &TournamentConfig,
        counter_width: u32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            global: GSharePredictor::new(gshare, counter_width)?,
            local: LocalPredictor::new(local, counter_width)?,
            choice: CounterTable::new(
                tournament.choice_entries,
                counter_width,
                IndexStrategy::Direct,
            )?,
        })
    }
}

impl DirectionPredictor for TournamentPredictor {
    /// Queries both components and routes through the choice table.
    fn predict(&self, address: u64) -> bool {
        let global_taken = self.global.predict(address);
        let local_taken = self.local.predict(address);

        if self.choice.read(address) {
            local_taken
        } else {
            global_taken
        }
    }

    /// Reinforces the choice table toward whichever component was correct,
    /// then trains both components with the real outcome.
    ///
    /// Component predictions are recomputed here from pre-update state;
    /// nothing mutates between the paired `predict` and `update` calls, so
    /// the recomputed values equal the ones the prediction was routed from.
    /// Both nudges fire independently: when the components agree the two
    /// updates normally cancel, except at a counter's saturation bounds.
    fn update(&mut self, actual: bool, predicted: bool, address: u64) {
        let global_pred = self.global.predict(address);
        let local_pred = self.local.predict(address);

        if global_pred == actual {
            self.choice.update(address, false);
        }
        if local_pred == actual {
            self.choice.update(address, true);
        }

        self.global.update(actual, predicted, address);
        self.local.update(actual, predicted, address);
    }
}
