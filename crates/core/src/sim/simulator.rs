//! Simulation loop: owns the predictor and the accumulator side-by-side.
//!
//! Events are processed strictly in order: each one is predicted, trained,
//! and recorded before the next is accepted. This models sequential
//! instruction retirement, which the shift-register history state depends
//! on; out-of-order application would corrupt it.

use tracing::trace;

use crate::config::Config;
use crate::error::ConfigError;
use crate::predictor::{DirectionPredictor, PredictorDispatch};
use crate::sim::BranchEvent;
use crate::stats::{AccumulatorReport, OutcomeAccumulator};

/// Top-level simulation: predictor state plus outcome accounting.
#[derive(Debug)]
pub struct Simulation {
    /// The predictor under test.
    predictor: PredictorDispatch,
    /// Outcome counters for the run.
    accumulator: OutcomeAccumulator,
}

impl Simulation {
    /// Creates a new simulation with the configured predictor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configured predictor cannot be
    /// constructed.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::from_predictor(PredictorDispatch::new(config)?))
    }

    /// Creates a simulation around an already-built predictor.
    pub fn from_predictor(predictor: PredictorDispatch) -> Self {
        Self {
            predictor,
            accumulator: OutcomeAccumulator::new(),
        }
    }

    /// Processes one retired branch to completion.
    ///
    /// Predicts the direction, trains the predictor with the actual
    /// outcome, and records the pair. Returns the prediction that was made.
    pub fn step(&mut self, event: BranchEvent) -> bool {
        let predicted = self.predictor.predict(event.address);
        self.predictor.update(event.taken, predicted, event.address);
        self.accumulator.record(predicted, event.taken);
        trace!(
            address = event.address,
            predicted,
            actual = event.taken,
            "retired branch"
        );
        predicted
    }

    /// Processes a whole trace in order.
    pub fn run<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = BranchEvent>,
    {
        for event in events {
            let _ = self.step(event);
        }
    }

    /// Returns the outcome counters accumulated so far.
    pub fn accumulator(&self) -> &OutcomeAccumulator {
        &self.accumulator
    }

    /// Produces the final report for the run.
    pub fn report(&self) -> AccumulatorReport {
        self.accumulator.report()
    }
}
