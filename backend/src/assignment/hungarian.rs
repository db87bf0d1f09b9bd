//! Kuhn-Munkres assignment
//!
//! Rows are tokens, columns are slots. `kuhn_munkres` yields the maximum
//! total and `kuhn_munkres_min` the minimum; both require no more rows
//! than columns, which `check_dimensions` guarantees.

use pathfinding::kuhn_munkres::{kuhn_munkres, kuhn_munkres_min};
use pathfinding::matrix::Matrix;

use super::{check_dimensions, AssignmentOutcome, AssignmentSearch};
use crate::core::error::DropResult;
use crate::models::PayoutTable;

#[derive(Debug, Default, Clone, Copy)]
pub struct HungarianSearch;

impl HungarianSearch {
    /// Slot chosen for every token in a maximum-payout assignment
    pub fn best_assignment(table: &PayoutTable, tokens: usize) -> DropResult<(i64, Vec<usize>)> {
        check_dimensions(table, tokens)?;
        if tokens == 0 {
            return Ok((0, Vec::new()));
        }
        let weights = weights(table, tokens);
        let (total, columns) = kuhn_munkres(&weights);
        Ok((total, columns.into_iter().map(|c| c + 1).collect()))
    }

    /// Slot chosen for every token in a minimum-payout assignment
    pub fn worst_assignment(table: &PayoutTable, tokens: usize) -> DropResult<(i64, Vec<usize>)> {
        check_dimensions(table, tokens)?;
        if tokens == 0 {
            return Ok((0, Vec::new()));
        }
        let weights = weights(table, tokens);
        let (total, columns) = kuhn_munkres_min(&weights);
        Ok((total, columns.into_iter().map(|c| c + 1).collect()))
    }
}

fn weights(table: &PayoutTable, tokens: usize) -> Matrix<i64> {
    Matrix::from_fn(tokens, table.slots(), |(token, slot_index)| {
        table.token_row(token)[slot_index]
    })
}

impl AssignmentSearch for HungarianSearch {
    fn name(&self) -> &'static str {
        "hungarian"
    }

    fn extremes(&self, table: &PayoutTable, tokens: usize) -> DropResult<AssignmentOutcome> {
        let (max, _) = Self::best_assignment(table, tokens)?;
        let (min, _) = Self::worst_assignment(table, tokens)?;
        Ok(AssignmentOutcome { min, max })
    }
}
