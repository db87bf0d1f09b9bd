//! Tests for exclusive slot assignment searches
//!
//! Every strategy must report exactly the extremes of the brute-force
//! search.

use pegboard_core_rs::assignment::{
    AssignmentOutcome, AssignmentSearch, BitmaskSearch, ExhaustiveSearch, HungarianSearch,
};
use pegboard_core_rs::{Board, DropError, NoopObserver, PayoutTable, Tape};

fn strategies() -> Vec<Box<dyn AssignmentSearch>> {
    vec![
        Box::new(ExhaustiveSearch),
        Box::new(BitmaskSearch::new(20)),
        Box::new(HungarianSearch),
    ]
}

/// 7-slot board with six short tapes
fn synthetic_table() -> PayoutTable {
    let board = Board::from_lines([
        "*.*.*.*.*.*.*",
        ".*.*.*.*.*.*.",
        "*.*...*.*.*.*",
        ".*.*.*...*.*.",
        "*.*.*.*.*.*.*",
    ])
    .unwrap();
    let tapes = Tape::parse_all(["L", "R", "LR", "RL", "LL", "RR"]).unwrap();
    PayoutTable::build(&board, &tapes, board.total_slots(), &mut NoopObserver).unwrap()
}

#[test]
fn test_synthetic_table_values() {
    let table = synthetic_table();
    assert_eq!(table.tokens(), 6);
    assert_eq!(table.slots(), 7);
    assert_eq!(table.row(0), Some(&[1, 0, 0, 0, 0, 2, 1][..]));
    assert_eq!(table.row(1), Some(&[5, 4, 5, 8, 7, 6, 5][..]));
    assert_eq!(table.row(3), Some(&[1, 2, 3, 4, 5, 6, 5][..]));
    assert_eq!(table.row(6), None);
}

#[test]
fn test_all_strategies_on_seven_slots() {
    let table = synthetic_table();
    for search in strategies() {
        let outcome = search.extremes(&table, 6).unwrap();
        assert_eq!(
            outcome,
            AssignmentOutcome { min: 11, max: 27 },
            "strategy {} disagrees",
            search.name()
        );
    }
}

#[test]
fn test_reverse_enumeration_order_agrees() {
    // Independent enumeration: highest token first, slots in descending order
    fn descend(table: &PayoutTable, token: usize, used: u32, total: i64, out: &mut Vec<i64>) {
        if token == usize::MAX {
            out.push(total);
            return;
        }
        for slot in (1..=table.slots()).rev() {
            let bit = 1u32 << slot;
            if used & bit != 0 {
                continue;
            }
            let value = table.get(token, slot).unwrap();
            let next = token.checked_sub(1).unwrap_or(usize::MAX);
            descend(table, next, used | bit, total + value, out);
        }
    }

    let table = synthetic_table();
    let mut totals = Vec::new();
    descend(&table, 5, 0, 0, &mut totals);
    assert_eq!(totals.len(), 7 * 6 * 5 * 4 * 3 * 2);

    let expected = ExhaustiveSearch.extremes(&table, 6).unwrap();
    assert_eq!(totals.iter().min().copied(), Some(expected.min));
    assert_eq!(totals.iter().max().copied(), Some(expected.max));
}

#[test]
fn test_tokens_equal_slots_is_a_permutation() {
    let table = PayoutTable::from_fn(4, 4, |token, slot| (token as i64 + 1) * slot as i64);
    // Rearrangement inequality: sorted pairing is max, reversed pairing is min
    let max = 30; // 1*1 + 2*2 + 3*3 + 4*4
    let min = 20; // 1*4 + 2*3 + 3*2 + 4*1
    for search in strategies() {
        assert_eq!(
            search.extremes(&table, 4).unwrap(),
            AssignmentOutcome { min, max },
            "strategy {}",
            search.name()
        );
    }
}

#[test]
fn test_uses_only_leading_tokens() {
    // Token 2 has huge payouts but only tokens 0 and 1 are assigned
    let table = PayoutTable::from_fn(3, 3, |token, _| if token == 2 { 100 } else { 1 });
    for search in strategies() {
        assert_eq!(
            search.extremes(&table, 2).unwrap(),
            AssignmentOutcome { min: 2, max: 2 }
        );
    }
}

#[test]
fn test_insufficient_slots() {
    let table = PayoutTable::from_fn(6, 5, |_, _| 1);
    for search in strategies() {
        assert_eq!(
            search.extremes(&table, 6),
            Err(DropError::InsufficientSlots {
                required: 6,
                available: 5
            })
        );
    }
}

#[test]
fn test_insufficient_tokens() {
    let table = PayoutTable::from_fn(4, 9, |_, _| 1);
    for search in strategies() {
        assert_eq!(
            search.extremes(&table, 6),
            Err(DropError::InsufficientTokens {
                required: 6,
                available: 4
            })
        );
    }
}

#[test]
fn test_hungarian_assignments_reach_extremes() {
    let table = synthetic_table();
    let (max, best) = HungarianSearch::best_assignment(&table, 6).unwrap();
    let (min, worst) = HungarianSearch::worst_assignment(&table, 6).unwrap();
    assert_eq!((min, max), (11, 27));

    let sum = |slots: &[usize]| -> i64 {
        slots
            .iter()
            .enumerate()
            .map(|(token, &slot)| table.get(token, slot).unwrap())
            .sum()
    };
    assert_eq!(sum(&best), 27);
    assert_eq!(sum(&worst), 11);
}
