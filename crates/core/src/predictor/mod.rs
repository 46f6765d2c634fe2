//! Branch direction predictor implementations.
//!
//! This module contains the direction prediction algorithms: static,
//! bimodal, gshare, local-history, and tournament predictors, together
//! with the common [`DirectionPredictor`] interface they implement.

pub use self::direction::DirectionPredictor;

/// Direction predictor trait and common functionality.
pub mod direction;

/// Bimodal predictor (per-address saturating bias).
pub mod bimodal;

/// Global history predictor (gshare algorithm).
pub mod gshare;

/// Local history predictor (per-address pattern tracking).
pub mod local;

/// Static predictor (always not-taken).
pub mod static_bp;

/// Tournament predictor (meta-predicted gshare/local hybrid).
pub mod tournament;

use self::{
    bimodal::BimodalPredictor, gshare::GSharePredictor, local::LocalPredictor,
    static_bp::StaticPredictor, tournament::TournamentPredictor,
};
use crate::config::{Config, PredictorKind};
use crate::error::ConfigError;

/// Enum wrapper for static dispatch of direction predictors.
/// This avoids vtable lookups in the per-event hot loop.
#[derive(Debug)]
pub enum PredictorDispatch {
    /// Always-not-taken predictor.
    Static(StaticPredictor),
    /// Per-address bias predictor.
    Bimodal(BimodalPredictor),
    /// Global history predictor.
    GShare(GSharePredictor),
    /// Local history predictor.
    Local(LocalPredictor),
    /// Meta-predicted hybrid predictor.
    Tournament(TournamentPredictor),
}

impl PredictorDispatch {
    /// Creates a new predictor based on configuration.
    ///
    /// Selects the configured algorithm and sizes its tables from the
    /// matching config section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any configured table capacity is zero
    /// or any configured bit width falls outside `1..=64`.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let width = config.counter_width;

        Ok(match config.predictor {
            PredictorKind::Static => Self::Static(StaticPredictor::new()),
            PredictorKind::Bimodal => {
                Self::Bimodal(BimodalPredictor::new(&config.bimodal, width)?)
            }
            PredictorKind::GShare => Self::GShare(GSharePredictor::new(&config.gshare, width)?),
            PredictorKind::Local => Self::Local(LocalPredictor::new(&config.local, width)?),
            PredictorKind::Tournament => Self::Tournament(TournamentPredictor::new(
                &config.gshare,
                &config.local,
                &config.tournament,
                width,
            )?),
        })
    }
}

impl DirectionPredictor for PredictorDispatch {
    /// Predicts whether the branch at the given address will be taken.
    #[inline(always)]
    fn predict(&self, address: u64) -> bool {
        match self {
            Self::Static(bp) => bp.predict(address),
            Self::Bimodal(bp) => bp.predict(address),
            Self::GShare(bp) => bp.predict(address),
            Self::Local(bp) => bp.predict(address),
            Self::Tournament(bp) => bp.predict(address),
        }
    }

    /// Trains the predictor with the resolved outcome of a branch.
    #[inline(always)]
    fn update(&mut self, actual: bool, predicted: bool, address: u64) {
        match self {
            Self::Static(bp) => bp.update(actual, predicted, address),
            Self::Bimodal(bp) => bp.update(actual, predicted, address),
            Self::GShare(bp) => bp.update(actual, predicted, address),
            Self::Local(bp) => bp.update(actual, predicted, address),
            Self::Tournament(bp) => bp.update(actual, predicted, address),
        }
    }
}
