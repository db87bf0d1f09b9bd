//! Payout model
//!
//! A token dropped from a starting position scores
//! `max(0, exit_slot * 2 - start_position)`. The payout table holds that
//! score for every (token, starting slot) pair and is read-only once built.

use serde::{Deserialize, Serialize};

use crate::core::error::{DropError, DropResult};
use crate::models::{Board, Tape};
use crate::simulation::{simulate, Evaluation, Observer};

/// Score for landing in `exit_slot` after starting at `start_position`
///
/// # Example
/// ```
/// use pegboard_core_rs::payout;
///
/// assert_eq!(payout(5, 3), 7);
/// assert_eq!(payout(1, 9), 0); // never negative
/// ```
pub fn payout(exit_slot: usize, start_position: usize) -> i64 {
    (exit_slot as i64 * 2 - start_position as i64).max(0)
}

/// Payouts indexed by token and 1-based starting slot
///
/// `values.len() == tokens * slots` holds for every table, including
/// deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPayoutTable")]
pub struct PayoutTable {
    tokens: usize,
    slots: usize,
    /// Row-major: `values[token * slots + (slot - 1)]`
    values: Vec<i64>,
}

#[derive(Deserialize)]
struct RawPayoutTable {
    tokens: usize,
    slots: usize,
    values: Vec<i64>,
}

impl TryFrom<RawPayoutTable> for PayoutTable {
    type Error = DropError;

    fn try_from(raw: RawPayoutTable) -> Result<Self, Self::Error> {
        let expected = raw.tokens.checked_mul(raw.slots);
        if expected != Some(raw.values.len()) {
            return Err(DropError::MalformedTable {
                reason: format!(
                    "{} values for {} tokens x {} slots",
                    raw.values.len(),
                    raw.tokens,
                    raw.slots
                ),
            });
        }
        Ok(Self {
            tokens: raw.tokens,
            slots: raw.slots,
            values: raw.values,
        })
    }
}

impl PayoutTable {
    /// Simulate every tape from every slot in `1..=slots`
    ///
    /// Each evaluation is reported to `observer` in token order, then slot
    /// order.
    ///
    /// # Errors
    /// `InvalidSlot` when `slots` exceeds the board's slot count.
    pub fn build(
        board: &Board,
        tapes: &[Tape],
        slots: usize,
        observer: &mut dyn Observer,
    ) -> DropResult<Self> {
        if slots > board.total_slots() {
            return Err(DropError::InvalidSlot {
                slot: slots,
                total_slots: board.total_slots(),
            });
        }

        let mut values = Vec::with_capacity(tapes.len() * slots);
        for (token, tape) in tapes.iter().enumerate() {
            for start_slot in 1..=slots {
                let exit_slot = simulate(board, tape, start_slot)?;
                let score = payout(exit_slot, start_slot);
                observer.on_evaluation(&Evaluation {
                    token,
                    start_slot,
                    exit_slot,
                    payout: score,
                });
                values.push(score);
            }
        }

        Ok(Self {
            tokens: tapes.len(),
            slots,
            values,
        })
    }

    /// Table filled from `f(token, slot)` with 1-based slots
    pub fn from_fn<F>(tokens: usize, slots: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> i64,
    {
        let mut values = Vec::with_capacity(tokens * slots);
        for token in 0..tokens {
            for slot in 1..=slots {
                values.push(f(token, slot));
            }
        }
        Self {
            tokens,
            slots,
            values,
        }
    }

    pub fn tokens(&self) -> usize {
        self.tokens
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Payout for `token` starting at 1-based `slot`
    pub fn get(&self, token: usize, slot: usize) -> Option<i64> {
        if token >= self.tokens || slot == 0 || slot > self.slots {
            return None;
        }
        Some(self.values[token * self.slots + slot - 1])
    }

    /// All payouts of one token, slot 1 first
    pub fn row(&self, token: usize) -> Option<&[i64]> {
        if token >= self.tokens {
            return None;
        }
        Some(self.token_row(token))
    }

    /// Row access for searches that already checked `token < tokens`
    pub(crate) fn token_row(&self, token: usize) -> &[i64] {
        let start = token * self.slots;
        &self.values[start..start + self.slots]
    }

    /// Best slot and payout for `token`; the lowest slot wins ties
    pub fn best_for(&self, token: usize) -> Option<(usize, i64)> {
        self.row(token)?
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, i64)>, (index, &value)| match best {
                Some((_, current)) if current >= value => best,
                _ => Some((index + 1, value)),
            })
    }

    /// Largest single entry in the table (0 when empty)
    pub fn max_payout(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}
