//! Exhaustive enumeration of exclusive assignments
//!
//! Depth-first over tokens; each level tries every slot not yet taken by
//! an earlier token. Visits the full falling-factorial search space.

use super::{check_dimensions, AssignmentOutcome, AssignmentSearch};
use crate::core::error::DropResult;
use crate::models::PayoutTable;

/// Brute-force search, the reference every other strategy must match
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSearch;

impl ExhaustiveSearch {
    /// Call `visit` with the total of every exclusive assignment
    ///
    /// Assignments are produced in lexicographic order of the slot
    /// sequence (token 0's slot varies slowest).
    pub fn for_each_total<F>(table: &PayoutTable, tokens: usize, mut visit: F) -> DropResult<()>
    where
        F: FnMut(&[usize], i64),
    {
        check_dimensions(table, tokens)?;
        let mut used = vec![false; table.slots()];
        let mut chosen = Vec::with_capacity(tokens);
        descend(table, tokens, &mut used, &mut chosen, 0, &mut visit);
        Ok(())
    }
}

fn descend<F>(
    table: &PayoutTable,
    tokens: usize,
    used: &mut [bool],
    chosen: &mut Vec<usize>,
    total: i64,
    visit: &mut F,
) where
    F: FnMut(&[usize], i64),
{
    let token = chosen.len();
    if token == tokens {
        visit(chosen, total);
        return;
    }

    let row = table.token_row(token);
    for slot_index in 0..used.len() {
        if used[slot_index] {
            continue;
        }
        used[slot_index] = true;
        chosen.push(slot_index + 1);
        descend(table, tokens, used, chosen, total + row[slot_index], visit);
        chosen.pop();
        used[slot_index] = false;
    }
}

impl AssignmentSearch for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn extremes(&self, table: &PayoutTable, tokens: usize) -> DropResult<AssignmentOutcome> {
        let mut outcome: Option<AssignmentOutcome> = None;
        Self::for_each_total(table, tokens, |_, total| match outcome.as_mut() {
            Some(current) => current.include(total),
            None => outcome = Some(AssignmentOutcome::single(total)),
        })?;
        // check_dimensions guarantees at least one assignment
        Ok(outcome.unwrap_or(AssignmentOutcome::single(0)))
    }
}
