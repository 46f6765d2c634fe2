//! Outcome accumulation and correctness reporting.
//!
//! This module tracks prediction quality for a simulation run. It provides:
//! 1. **Counters:** The four predicted/actual outcome combinations, monotonic for the run.
//! 2. **Derived metrics:** Totals, mispredictions, and the truncated correctness percentage.
//! 3. **Reporting:** A serializable report, a sectioned pretty-printer, and the
//!    classic one-line result-file format.

use std::io::{self, Write};

use serde::Serialize;

/// Per-run outcome counters, updated after every prediction/outcome pair.
///
/// Each counter is monotonically non-decreasing for the lifetime of the run;
/// `record` increments exactly one of the four per event.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutcomeAccumulator {
    /// Events predicted taken that were taken.
    pub taken_correct: u64,
    /// Events predicted taken that were not taken.
    pub taken_incorrect: u64,
    /// Events predicted not-taken that were not taken.
    pub not_taken_correct: u64,
    /// Events predicted not-taken that were taken.
    pub not_taken_incorrect: u64,
}

impl OutcomeAccumulator {
    /// Creates an accumulator with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one prediction/outcome pair.
    pub fn record(&mut self, predicted: bool, actual: bool) {
        match (predicted, actual) {
            (true, true) => self.taken_correct += 1,
            (true, false) => self.taken_incorrect += 1,
            (false, false) => self.not_taken_correct += 1,
            (false, true) => self.not_taken_incorrect += 1,
        }
    }

    /// Returns the number of correct predictions.
    pub fn correct(&self) -> u64 {
        self.taken_correct + self.not_taken_correct
    }

    /// Returns the number of mispredictions.
    pub fn mispredicted(&self) -> u64 {
        self.taken_incorrect + self.not_taken_incorrect
    }

    /// Returns the number of recorded events.
    pub fn total(&self) -> u64 {
        self.correct() + self.mispredicted()
    }

    /// Returns the integer-truncated correctness percentage.
    ///
    /// `None` when no events have been recorded; the zero-event case is the
    /// one condition under which the percentage is undefined, and it is
    /// reported explicitly rather than as a numeric value.
    pub fn correctness_percent(&self) -> Option<u64> {
        let total = self.total();
        if total == 0 {
            None
        } else {
            Some(100 * self.correct() / total)
        }
    }

    /// Produces the final report for this run.
    pub fn report(&self) -> AccumulatorReport {
        AccumulatorReport {
            taken_correct: self.taken_correct,
            taken_incorrect: self.taken_incorrect,
            not_taken_correct: self.not_taken_correct,
            not_taken_incorrect: self.not_taken_incorrect,
            correctness_percent: self.correctness_percent(),
        }
    }

    /// Prints the prediction statistics to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("BRANCH PREDICTION STATISTICS");
        println!("==========================================================");
        println!("bp.events                {}", self.total());
        println!("bp.taken_correct         {}", self.taken_correct);
        println!("bp.taken_incorrect       {}", self.taken_incorrect);
        println!("bp.not_taken_correct     {}", self.not_taken_correct);
        println!("bp.not_taken_incorrect   {}", self.not_taken_incorrect);
        println!("bp.mispredicts           {}", self.mispredicted());
        match self.correctness_percent() {
            Some(percent) => println!("bp.accuracy              {}%", percent),
            None => println!("bp.accuracy              undefined (no events)"),
        }
        println!("==========================================================");
    }

    /// Writes the one-line result-file format.
    ///
    /// The line carries the four raw counters; the correctness line follows
    /// only when at least one event was recorded.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from the underlying writer.
    pub fn write_result<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "takenCorrect {} takenIncorrect {} notTakenCorrect {} notTakenIncorrect {}",
            self.taken_correct,
            self.taken_incorrect,
            self.not_taken_correct,
            self.not_taken_incorrect
        )?;
        if let Some(percent) = self.correctness_percent() {
            writeln!(writer, "Correctness: {}%", percent)?;
        }
        Ok(())
    }
}

/// Final statistics for a simulation run.
///
/// Serializable snapshot of the accumulator, suitable for machine-readable
/// output. `correctness_percent` is absent when no events were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccumulatorReport {
    /// Events predicted taken that were taken.
    pub taken_correct: u64,
    /// Events predicted taken that were not taken.
    pub taken_incorrect: u64,
    /// Events predicted not-taken that were not taken.
    pub not_taken_correct: u64,
    /// Events predicted not-taken that were taken.
    pub not_taken_incorrect: u64,
    /// Integer-truncated correctness percentage; `None` on zero events.
    pub correctness_percent: Option<u64>,
}
