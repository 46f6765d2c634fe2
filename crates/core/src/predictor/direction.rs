//! Direction Predictor Interface.
//!
//! This module defines the `DirectionPredictor` trait that all prediction
//! implementations must adhere to. It provides a common interface for
//! predicting conditional branch outcomes and training on resolved ones.

/// Trait for branch direction prediction algorithms.
///
/// A predictor is a deterministic finite-state machine over per-index
/// table state. The caller drives it in strict retirement order: one
/// `predict` followed by one `update` per retired branch.
pub trait DirectionPredictor {
    /// Predicts whether the branch at `address` will be taken.
    ///
    /// # Arguments
    ///
    /// * `address` - Program counter of the branch instruction
    ///
    /// # Returns
    ///
    /// `true` if the branch is predicted taken.
    fn predict(&self, address: u64) -> bool;

    /// Updates the predictor with the actual branch outcome.
    ///
    /// Called after branch resolution to train the predictor with the
    /// actual taken/not-taken decision.
    ///
    /// # Arguments
    ///
    /// * `actual` - Whether the branch was actually taken
    /// * `predicted` - The prediction returned by the paired `predict` call
    /// * `address` - Program counter of the branch instruction
    fn update(&mut self, actual: bool, predicted: bool, address: u64);
}
