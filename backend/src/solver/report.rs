//! Solve report
//!
//! A serializable record of one solved variant together with the shape of
//! its inputs and a SHA-256 digest identifying them.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::Variant;
use crate::core::config::{AssignmentStrategy, SolverConfig};
use crate::models::{Board, Tape};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub variant: Variant,

    /// Textual answer exactly as the entry points return it
    pub answer: String,

    pub board_height: usize,
    pub board_width: usize,
    pub total_slots: usize,
    pub peg_count: usize,

    /// Number of tapes supplied (not all are used by every variant)
    pub tokens: usize,

    /// Search strategy, only recorded for the exclusive variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<AssignmentStrategy>,

    /// SHA-256 of the board rows and tapes, hex encoded
    pub input_digest: String,
}

impl SolveReport {
    pub fn new(
        variant: Variant,
        answer: String,
        board: &Board,
        tapes: &[Tape],
        config: &SolverConfig,
    ) -> Self {
        Self {
            variant,
            answer,
            board_height: board.height(),
            board_width: board.width(),
            total_slots: board.total_slots(),
            peg_count: board.peg_count(),
            tokens: tapes.len(),
            strategy: (variant == Variant::C).then_some(config.strategy),
            input_digest: input_digest(board, tapes),
        }
    }
}

/// Hex SHA-256 over the board rows, a blank line, then one tape per line
///
/// This is the canonical text layout of a puzzle input, so the digest of a
/// parsed input matches the digest of its normalized source text.
pub fn input_digest(board: &Board, tapes: &[Tape]) -> String {
    let mut hasher = Sha256::new();
    for line in board.lines() {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hasher.update(b"\n");
    for tape in tapes {
        hasher.update(tape.to_string().as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}
