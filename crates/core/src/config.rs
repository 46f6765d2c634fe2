//! Configuration system for the branch predictor simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline table sizes and register widths for every predictor.
//! 2. **Structures:** Per-predictor config for bimodal, gshare, local, and tournament.
//! 3. **Enums:** The predictor algorithm selector.
//!
//! Configuration is supplied via JSON or use `Config::default()` for the CLI.
//! Capacities and widths are validated when the predictor is constructed, not
//! at deserialization.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline predictor geometry when not explicitly
/// overridden in a JSON configuration.
mod defaults {
    /// Saturating counter width in bits (2-bit counters).
    pub const COUNTER_WIDTH: u32 = 2;

    /// Bimodal direction table entry count (4096 counters).
    pub const BIMODAL_ENTRIES: usize = 4096;

    /// GShare global history length in bits.
    pub const GSHARE_HISTORY_BITS: u32 = 12;

    /// GShare pattern history table entry count.
    pub const GSHARE_ENTRIES: usize = 4096;

    /// Local predictor history table entry count (per-address slots).
    pub const LOCAL_HISTORY_ENTRIES: usize = 1024;

    /// Local predictor history length in bits.
    pub const LOCAL_HISTORY_BITS: u32 = 10;

    /// Local predictor pattern table entry count.
    pub const LOCAL_PATTERN_ENTRIES: usize = 1024;

    /// Tournament choice table entry count.
    pub const CHOICE_ENTRIES: usize = 4096;
}

/// Branch prediction algorithm types.
///
/// Specifies the direction prediction algorithm a simulation run is built
/// around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PredictorKind {
    /// Static predictor (always predict not-taken).
    #[default]
    Static,
    /// Bimodal predictor: per-address saturating bias, no history.
    Bimodal,
    /// Global history predictor (gshare).
    ///
    /// XOR-folds the global history register with the address to index a
    /// shared counter table.
    #[serde(alias = "Gshare")]
    GShare,
    /// Local history predictor.
    ///
    /// Per-address history registers feeding a pattern-indexed counter table.
    Local,
    /// Tournament predictor combining gshare and local components.
    ///
    /// A choice table learns per address which component to trust.
    Tournament,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use bpsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.counter_width, 2);
/// assert_eq!(config.bimodal.table_entries, 4096);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use bpsim_core::config::{Config, PredictorKind};
///
/// let json = r#"{
///     "predictor": "Tournament",
///     "counter_width": 2,
///     "gshare": {
///         "history_bits": 10,
///         "table_entries": 1024
///     },
///     "local": {
///         "history_entries": 256,
///         "history_bits": 8,
///         "pattern_entries": 256
///     },
///     "tournament": {
///         "choice_entries": 1024
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.predictor, PredictorKind::Tournament);
/// assert_eq!(config.gshare.table_entries, 1024);
/// assert_eq!(config.tournament.choice_entries, 1024);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Predictor algorithm to simulate.
    #[serde(default)]
    pub predictor: PredictorKind,

    /// Saturating counter width in bits, shared by every table.
    #[serde(default = "Config::default_counter_width")]
    pub counter_width: u32,

    /// Bimodal predictor geometry.
    #[serde(default)]
    pub bimodal: BimodalConfig,

    /// GShare predictor geometry.
    #[serde(default)]
    pub gshare: GShareConfig,

    /// Local history predictor geometry.
    #[serde(default)]
    pub local: LocalConfig,

    /// Tournament meta-predictor geometry.
    #[serde(default)]
    pub tournament: TournamentConfig,
}

impl Config {
    /// Returns the default saturating counter width in bits.
    fn default_counter_width() -> u32 {
        defaults::COUNTER_WIDTH
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predictor: PredictorKind::default(),
            counter_width: defaults::COUNTER_WIDTH,
            bimodal: BimodalConfig::default(),
            gshare: GShareConfig::default(),
            local: LocalConfig::default(),
            tournament: TournamentConfig::default(),
        }
    }
}

/// Bimodal predictor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BimodalConfig {
    /// Direction table entry count
    #[serde(default = "BimodalConfig::default_entries")]
    pub table_entries: usize,
}

impl BimodalConfig {
    /// Returns the default bimodal direction table entry count.
    fn default_entries() -> usize {
        defaults::BIMODAL_ENTRIES
    }
}

impl Default for BimodalConfig {
    fn default() -> Self {
        Self {
            table_entries: defaults::BIMODAL_ENTRIES,
        }
    }
}

/// GShare predictor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GShareConfig {
    /// Global history register length in bits
    #[serde(default = "GShareConfig::default_history_bits")]
    pub history_bits: u32,

    /// Pattern history table entry count
    #[serde(default = "GShareConfig::default_entries")]
    pub table_entries: usize,
}

impl GShareConfig {
    /// Returns the default global history length in bits.
    fn default_history_bits() -> u32 {
        defaults::GSHARE_HISTORY_BITS
    }

    /// Returns the default pattern history table entry count.
    fn default_entries() -> usize {
        defaults::GSHARE_ENTRIES
    }
}

impl Default for GShareConfig {
    fn default() -> Self {
        Self {
            history_bits: defaults::GSHARE_HISTORY_BITS,
            table_entries: defaults::GSHARE_ENTRIES,
        }
    }
}

/// Local history predictor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalConfig {
    /// History table entry count (per-address slots)
    #[serde(default = "LocalConfig::default_history_entries")]
    pub history_entries: usize,

    /// History register length in bits
    #[serde(default = "LocalConfig::default_history_bits")]
    pub history_bits: u32,

    /// Pattern-indexed counter table entry count
    #[serde(default = "LocalConfig::default_pattern_entries")]
    pub pattern_entries: usize,
}

impl LocalConfig {
    /// Returns the default local history table entry count.
    fn default_history_entries() -> usize {
        defaults::LOCAL_HISTORY_ENTRIES
    }

    /// Returns the default local history length in bits.
    fn default_history_bits() -> u32 {
        defaults::LOCAL_HISTORY_BITS
    }

    /// Returns the default pattern table entry count.
    fn default_pattern_entries() -> usize {
        defaults::LOCAL_PATTERN_ENTRIES
    }
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            history_entries: defaults::LOCAL_HISTORY_ENTRIES,
            history_bits: defaults::LOCAL_HISTORY_BITS,
            pattern_entries: defaults::LOCAL_PATTERN_ENTRIES,
        }
    }
}

/// Tournament meta-predictor configuration.
///
/// The component predictors take their geometry from [`GShareConfig`] and
/// [`LocalConfig`]; this structure only sizes the choice table.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentConfig {
    /// Choice table entry count
    #[serde(default = "TournamentConfig::default_choice_entries")]
    pub choice_entries: usize,
}

impl TournamentConfig {
    /// Returns the default choice table entry count.
    fn default_choice_entries() -> usize {
        defaults::CHOICE_ENTRIES
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            choice_entries: defaults::CHOICE_ENTRIES,
        }
    }
}
