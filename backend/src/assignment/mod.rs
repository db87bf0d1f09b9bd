//! Exclusive slot assignment
//!
//! Given a payout table, find the smallest and the largest total payout
//! over every assignment of the first `tokens` tokens to pairwise distinct
//! starting slots. Token `i` always receives its own slot; the search space
//! is the falling factorial `slots * (slots - 1) * ... * (slots - tokens + 1)`.
//!
//! # Strategies
//!
//! - **Exhaustive**: enumerates every assignment. Reference implementation.
//! - **Bitmask**: dynamic programming over the set of used slots. The
//!   arena holds `2^slots` entries, so it is bounded by configuration.
//! - **Hungarian**: Kuhn-Munkres for the maximum and the minimum.
//!
//! All strategies return exactly the same extremes.
//!
//! # Example
//!
//! ```rust
//! use pegboard_core_rs::assignment::{AssignmentSearch, ExhaustiveSearch};
//! use pegboard_core_rs::PayoutTable;
//!
//! // Token 0 prefers slot 1, token 1 prefers slot 1 as well
//! let table = PayoutTable::from_fn(2, 2, |token, slot| match (token, slot) {
//!     (0, 1) => 5,
//!     (1, 1) => 4,
//!     _ => 1,
//! });
//! let outcome = ExhaustiveSearch.extremes(&table, 2).unwrap();
//! assert_eq!(outcome.max, 6); // 5 + 1
//! assert_eq!(outcome.min, 5); // 1 + 4
//! ```

pub mod bitmask;
pub mod exhaustive;
pub mod hungarian;

use serde::{Deserialize, Serialize};

use crate::core::config::{AssignmentStrategy, SolverConfig};
use crate::core::error::{DropError, DropResult};
use crate::models::PayoutTable;

pub use bitmask::BitmaskSearch;
pub use exhaustive::ExhaustiveSearch;
pub use hungarian::HungarianSearch;

/// Extreme totals over all exclusive assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    pub min: i64,
    pub max: i64,
}

impl AssignmentOutcome {
    /// Outcome holding a single total
    pub fn single(total: i64) -> Self {
        Self {
            min: total,
            max: total,
        }
    }

    /// Widen to include `total`
    pub fn include(&mut self, total: i64) {
        self.min = self.min.min(total);
        self.max = self.max.max(total);
    }
}

/// A search for the extreme exclusive-assignment totals
pub trait AssignmentSearch {
    fn name(&self) -> &'static str;

    /// Min and max total over assignments of tokens `0..tokens`
    ///
    /// # Errors
    /// `InsufficientTokens` when the table has fewer than `tokens` rows,
    /// `InsufficientSlots` when it has fewer than `tokens` slots.
    fn extremes(&self, table: &PayoutTable, tokens: usize) -> DropResult<AssignmentOutcome>;
}

/// Search implementing the configured strategy
pub fn search_for(config: &SolverConfig) -> Box<dyn AssignmentSearch> {
    match config.strategy {
        AssignmentStrategy::Exhaustive => Box::new(ExhaustiveSearch),
        AssignmentStrategy::Bitmask => Box::new(BitmaskSearch::new(config.max_bitmask_slots)),
        AssignmentStrategy::Hungarian => Box::new(HungarianSearch),
    }
}

/// Shared precondition for every strategy
pub(crate) fn check_dimensions(table: &PayoutTable, tokens: usize) -> DropResult<()> {
    if table.tokens() < tokens {
        return Err(DropError::InsufficientTokens {
            required: tokens,
            available: table.tokens(),
        });
    }
    if table.slots() < tokens {
        return Err(DropError::InsufficientSlots {
            required: tokens,
            available: table.slots(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PayoutTable {
        PayoutTable::from_fn(3, 5, |token, slot| ((token * 7 + slot * 3) % 11) as i64)
    }

    #[test]
    fn test_strategies_agree() {
        let table = sample_table();
        let exhaustive = ExhaustiveSearch.extremes(&table, 3).unwrap();
        let bitmask = BitmaskSearch::new(20).extremes(&table, 3).unwrap();
        let hungarian = HungarianSearch.extremes(&table, 3).unwrap();
        assert_eq!(exhaustive, bitmask);
        assert_eq!(exhaustive, hungarian);
    }

    #[test]
    fn test_dimension_checks() {
        let table = sample_table();
        assert_eq!(
            check_dimensions(&table, 4),
            Err(DropError::InsufficientTokens {
                required: 4,
                available: 3
            })
        );

        let narrow = PayoutTable::from_fn(6, 4, |_, _| 1);
        assert_eq!(
            check_dimensions(&narrow, 6),
            Err(DropError::InsufficientSlots {
                required: 6,
                available: 4
            })
        );
    }

    #[test]
    fn test_search_for_follows_config() {
        let config = SolverConfig::default().with_strategy(AssignmentStrategy::Hungarian);
        assert_eq!(search_for(&config).name(), "hungarian");
        assert_eq!(search_for(&SolverConfig::default()).name(), "bitmask");
    }
}
