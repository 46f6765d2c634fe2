//! Index hashing strategies for table lookup.
//!
//! A strategy is a pure function from `(address, history)` to a table row.
//! The fold happens before the modulo reduction, so every strategy yields an
//! in-bounds index for any 64-bit key and any capacity.

/// How a table row is selected from a branch address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexStrategy {
    /// Index by address alone; auxiliary history is ignored.
    #[default]
    Direct,
    /// Index by `address XOR history` (the gshare fold).
    ///
    /// XOR-folding decorrelates global history from address bits so that
    /// the same branch in different history contexts lands on distinct
    /// rows instead of colliding purely on address.
    XorFold,
}

impl IndexStrategy {
    /// Computes the table row for a key under this strategy.
    ///
    /// `capacity` must be non-zero; table constructors validate this before
    /// any lookup can happen.
    pub fn index(self, address: u64, history: u64, capacity: usize) -> usize {
        let folded = match self {
            Self::Direct => address,
            Self::XorFold => address ^ history,
        };
        (folded % capacity as u64) as usize
    }
}
