//! Solver configuration
//!
//! All knobs have defaults matching the standard puzzle layout, so
//! `SolverConfig::default()` is what the textual entry points use.

use serde::{Deserialize, Serialize};

use super::error::{DropError, DropResult};

/// Search strategy used for the exclusive slot assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStrategy {
    /// Enumerate every injective assignment
    Exhaustive,
    /// Dynamic programming over the set of used slots
    #[default]
    Bitmask,
    /// Kuhn-Munkres, once for each extreme
    Hungarian,
}

impl AssignmentStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            AssignmentStrategy::Exhaustive => "exhaustive",
            AssignmentStrategy::Bitmask => "bitmask",
            AssignmentStrategy::Hungarian => "hungarian",
        }
    }
}

/// Upper bound for `max_bitmask_slots`; the arena at 24 slots is ~400 MiB
pub const BITMASK_SLOT_LIMIT: usize = 24;

/// Configuration shared by the three variants
///
/// # Example
/// ```
/// use pegboard_core_rs::{AssignmentStrategy, SolverConfig};
///
/// let config: SolverConfig =
///     serde_json::from_str(r#"{"strategy": "hungarian", "trace": true}"#).unwrap();
/// assert_eq!(config.strategy, AssignmentStrategy::Hungarian);
/// assert_eq!(config.exclusive_tokens, 6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Tokens dropped at fixed positions (fixed-position variant)
    pub fixed_positions_tokens: usize,

    /// Starting slots tried for every token (best-of-N variant)
    pub best_of_candidates: usize,

    /// Tokens that must receive distinct slots (exclusive variant)
    pub exclusive_tokens: usize,

    /// Search used by the exclusive variant
    pub strategy: AssignmentStrategy,

    /// Largest slot count the bitmask search accepts (arena is 2^slots)
    pub max_bitmask_slots: usize,

    /// Route per-evaluation records to the `log` facade
    pub trace: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            fixed_positions_tokens: 9,
            best_of_candidates: 13,
            exclusive_tokens: 6,
            strategy: AssignmentStrategy::default(),
            max_bitmask_slots: 20,
            trace: false,
        }
    }
}

impl SolverConfig {
    /// Check that every count is usable
    pub fn validate(&self) -> DropResult<()> {
        if self.fixed_positions_tokens == 0 {
            return Err(DropError::InvalidConfig(
                "fixed_positions_tokens must be positive".to_string(),
            ));
        }
        if self.best_of_candidates == 0 {
            return Err(DropError::InvalidConfig(
                "best_of_candidates must be positive".to_string(),
            ));
        }
        if self.exclusive_tokens == 0 {
            return Err(DropError::InvalidConfig(
                "exclusive_tokens must be positive".to_string(),
            ));
        }
        if self.max_bitmask_slots == 0 || self.max_bitmask_slots > BITMASK_SLOT_LIMIT {
            return Err(DropError::InvalidConfig(format!(
                "max_bitmask_slots must be in 1..={}, got {}",
                BITMASK_SLOT_LIMIT, self.max_bitmask_slots
            )));
        }
        Ok(())
    }

    pub fn with_strategy(mut self, strategy: AssignmentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
