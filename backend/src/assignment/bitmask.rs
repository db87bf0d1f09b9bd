//! Dynamic programming over the set of used slots
//!
//! Tokens are assigned in index order, so a mask of used slots with `k`
//! bits set always describes tokens `0..k`. For every reachable mask the
//! arena keeps the smallest and the largest partial total; extending a
//! mask by one free slot assigns that slot to token `k`.

use super::{check_dimensions, AssignmentOutcome, AssignmentSearch};
use crate::core::config::BITMASK_SLOT_LIMIT;
use crate::core::error::{DropError, DropResult};
use crate::models::PayoutTable;

/// Bitmask search bounded by the largest slot count it accepts
#[derive(Debug, Clone, Copy)]
pub struct BitmaskSearch {
    max_slots: usize,
}

impl BitmaskSearch {
    /// Search accepting up to `max_slots` slots, capped at `BITMASK_SLOT_LIMIT`
    pub fn new(max_slots: usize) -> Self {
        Self {
            max_slots: max_slots.min(BITMASK_SLOT_LIMIT),
        }
    }
}

impl AssignmentSearch for BitmaskSearch {
    fn name(&self) -> &'static str {
        "bitmask"
    }

    fn extremes(&self, table: &PayoutTable, tokens: usize) -> DropResult<AssignmentOutcome> {
        check_dimensions(table, tokens)?;
        let slots = table.slots();
        if slots > self.max_slots {
            return Err(DropError::InvalidConfig(format!(
                "bitmask search supports at most {} slots, board has {}",
                self.max_slots, slots
            )));
        }

        let size = 1usize << slots;
        let mut arena: Vec<Option<AssignmentOutcome>> = vec![None; size];
        arena[0] = Some(AssignmentOutcome::single(0));
        let mut result: Option<AssignmentOutcome> = None;

        // Masks only grow, so increasing order visits every predecessor first
        for mask in 0..size {
            let Some(partial) = arena[mask] else {
                continue;
            };
            let token = mask.count_ones() as usize;
            if token == tokens {
                match result.as_mut() {
                    Some(best) => {
                        best.include(partial.min);
                        best.include(partial.max);
                    }
                    None => result = Some(partial),
                }
                continue;
            }

            let row = table.token_row(token);
            for (slot_index, &value) in row.iter().enumerate() {
                let bit = 1usize << slot_index;
                if mask & bit != 0 {
                    continue;
                }
                let next = &mut arena[mask | bit];
                let extended = AssignmentOutcome {
                    min: partial.min + value,
                    max: partial.max + value,
                };
                match next.as_mut() {
                    Some(existing) => {
                        existing.include(extended.min);
                        existing.include(extended.max);
                    }
                    None => *next = Some(extended),
                }
            }
        }

        Ok(result.unwrap_or(AssignmentOutcome::single(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::ExhaustiveSearch;

    #[test]
    fn test_matches_exhaustive_on_skewed_table() {
        let table = PayoutTable::from_fn(4, 6, |token, slot| {
            if slot == token + 1 {
                20
            } else {
                (slot as i64 - token as i64).abs()
            }
        });
        let expected = ExhaustiveSearch.extremes(&table, 4).unwrap();
        let actual = BitmaskSearch::new(20).extremes(&table, 4).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(actual.max, 80);
    }

    #[test]
    fn test_rejects_oversized_board() {
        let table = PayoutTable::from_fn(2, 8, |_, _| 1);
        let err = BitmaskSearch::new(7).extremes(&table, 2).unwrap_err();
        assert!(matches!(err, DropError::InvalidConfig(_)));
    }

    #[test]
    fn test_slot_limit_applies_to_direct_construction() {
        let table = PayoutTable::from_fn(1, BITMASK_SLOT_LIMIT + 1, |_, _| 1);
        assert!(matches!(
            BitmaskSearch::new(40).extremes(&table, 1),
            Err(DropError::InvalidConfig(_))
        ));
    }
}
