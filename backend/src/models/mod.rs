//! Domain models for the peg board engine

pub mod board;
pub mod payout;
pub mod tape;

// Re-exports
pub use board::{Board, PEG};
pub use payout::{payout, PayoutTable};
pub use tape::{Direction, Tape};
