//! Error taxonomy for the peg board engine
//!
//! Every precondition is checked before a simulation starts. Any violation
//! aborts the whole computation for the requested variant; there are no
//! partial results.

use thiserror::Error;

/// Errors that can occur while building inputs or solving a variant
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DropError {
    /// Board is empty, has zero-width rows, or rows of unequal width
    #[error("Malformed board: {reason}")]
    MalformedBoard { reason: String },

    /// Payout table whose values do not cover every (token, slot) pair
    #[error("Malformed payout table: {reason}")]
    MalformedTable { reason: String },

    /// A token's instruction tape has no symbols
    #[error("Tape for token {token} is empty")]
    EmptyTape { token: usize },

    /// A tape symbol is neither `L` nor `R`
    #[error("Tape for token {token} has invalid instruction {symbol:?} at position {position}")]
    InvalidInstruction {
        token: usize,
        position: usize,
        symbol: char,
    },

    /// Starting slot outside `[1, total_slots]`
    #[error("Slot {slot} is outside the board (1..={total_slots})")]
    InvalidSlot { slot: usize, total_slots: usize },

    /// Fewer tapes than the variant needs
    #[error("Variant needs {required} tokens but only {available} tapes were supplied")]
    InsufficientTokens { required: usize, available: usize },

    /// Fewer slots than tokens in an exclusive assignment
    #[error("Cannot assign {required} tokens to {available} distinct slots")]
    InsufficientSlots { required: usize, available: usize },

    /// Solver configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl DropError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        DropError::MalformedBoard {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type DropResult<T> = Result<T, DropError>;
