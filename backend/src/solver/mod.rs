//! Variant entry points
//!
//! All three variants share one payout component (simulator plus payout
//! formula) and differ only in which (token, start) pairs they evaluate
//! and how they combine the payouts:
//!
//! - **A, fixed positions**: token `i` enters at column `i * 2` and is
//!   scored against position `i + 1`. This raw column convention is kept
//!   as-is; it is not routed through the slot formula the other variants use.
//! - **B, best of N**: every token tries slots `1..=N` on its own and keeps
//!   its best payout. Tokens may share a slot.
//! - **C, exclusive**: the first six tokens receive pairwise distinct slots;
//!   reports the smallest and the largest achievable total.
//!
//! # Example
//!
//! ```rust
//! use pegboard_core_rs::{solve_variant_c, Board, Tape};
//!
//! let board = Board::from_lines(["*.*.*.*.*.*.*", ".*.*.*.*.*.*."]).unwrap();
//! let tapes = Tape::parse_all(["L", "R", "LR", "RL", "LL", "RR"]).unwrap();
//!
//! let answer = solve_variant_c(&board, &tapes).unwrap();
//! let (min, max) = answer.split_once(' ').unwrap();
//! assert!(min.parse::<i64>().unwrap() <= max.parse::<i64>().unwrap());
//! ```

pub mod report;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assignment::{search_for, AssignmentOutcome};
use crate::core::config::SolverConfig;
use crate::core::error::{DropError, DropResult};
use crate::models::{payout, Board, PayoutTable, Tape};
use crate::simulation::{simulate_from_column, Evaluation, LogObserver, NoopObserver, Observer};

pub use report::{input_digest, SolveReport};

/// The three puzzle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Fixed positions, summed payout
    A,
    /// Per-token best of N starting slots, summed payout
    B,
    /// Exclusive assignment, min and max total payout
    C,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::A => "a",
            Variant::B => "b",
            Variant::C => "c",
        };
        f.write_str(name)
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "1" => Ok(Variant::A),
            "b" | "2" => Ok(Variant::B),
            "c" | "3" => Ok(Variant::C),
            other => Err(format!("unknown variant '{}', expected a, b or c", other)),
        }
    }
}

/// Configured solver for all three variants
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver after validating its configuration
    pub fn new(config: SolverConfig) -> DropResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Variant A: sum of payouts for tokens dropped at fixed columns
    ///
    /// # Errors
    /// `InsufficientTokens` when fewer tapes than configured tokens exist;
    /// `InvalidSlot` when a fixed column lies beyond the board.
    pub fn fixed_positions_total(
        &self,
        board: &Board,
        tapes: &[Tape],
        observer: &mut dyn Observer,
    ) -> DropResult<i64> {
        let tokens = self.config.fixed_positions_tokens;
        require_tokens(tapes, tokens)?;

        let mut total = 0;
        for (token, tape) in tapes.iter().take(tokens).enumerate() {
            let position = token + 1;
            let exit_slot = simulate_from_column(board, tape, token * 2)?;
            let score = payout(exit_slot, position);
            observer.on_evaluation(&Evaluation {
                token,
                start_slot: position,
                exit_slot,
                payout: score,
            });
            total += score;
        }

        log::debug!("fixed positions: {} tokens, total {}", tokens, total);
        Ok(total)
    }

    /// Variant B: sum over tokens of each token's best payout
    ///
    /// With no tapes the total is 0.
    ///
    /// # Errors
    /// `InvalidSlot` when the board has fewer slots than configured
    /// candidates.
    pub fn best_of_n_total(
        &self,
        board: &Board,
        tapes: &[Tape],
        observer: &mut dyn Observer,
    ) -> DropResult<i64> {
        let table = PayoutTable::build(board, tapes, self.config.best_of_candidates, observer)?;

        let mut total = 0;
        for token in 0..table.tokens() {
            let best = table.best_for(token).map_or(0, |(_, value)| value);
            observer.on_token_best(token, best);
            total += best;
        }

        log::debug!(
            "best of {}: {} tokens, total {}",
            self.config.best_of_candidates,
            table.tokens(),
            total
        );
        Ok(total)
    }

    /// Variant C: extreme totals over exclusive slot assignments
    ///
    /// # Errors
    /// `InsufficientTokens` when fewer tapes than configured tokens exist;
    /// `InsufficientSlots` when the board has fewer slots than tokens.
    pub fn exclusive_extremes(
        &self,
        board: &Board,
        tapes: &[Tape],
        observer: &mut dyn Observer,
    ) -> DropResult<AssignmentOutcome> {
        let tokens = self.config.exclusive_tokens;
        require_tokens(tapes, tokens)?;
        if board.total_slots() < tokens {
            return Err(DropError::InsufficientSlots {
                required: tokens,
                available: board.total_slots(),
            });
        }

        let table = PayoutTable::build(board, &tapes[..tokens], board.total_slots(), observer)?;
        let search = search_for(&self.config);
        let outcome = search.extremes(&table, tokens)?;

        log::debug!(
            "exclusive ({}): {} tokens over {} slots, min {} max {}",
            search.name(),
            tokens,
            table.slots(),
            outcome.min,
            outcome.max
        );
        Ok(outcome)
    }

    /// Textual answer for `variant`
    ///
    /// Evaluation records go to the `log` facade when tracing is enabled.
    pub fn solve(&self, variant: Variant, board: &Board, tapes: &[Tape]) -> DropResult<String> {
        if self.config.trace {
            self.solve_with(variant, board, tapes, &mut LogObserver)
        } else {
            self.solve_with(variant, board, tapes, &mut NoopObserver)
        }
    }

    /// Textual answer for `variant`, reporting evaluations to `observer`
    pub fn solve_with(
        &self,
        variant: Variant,
        board: &Board,
        tapes: &[Tape],
        observer: &mut dyn Observer,
    ) -> DropResult<String> {
        let answer = match variant {
            Variant::A => self.fixed_positions_total(board, tapes, observer)?.to_string(),
            Variant::B => self.best_of_n_total(board, tapes, observer)?.to_string(),
            Variant::C => {
                let outcome = self.exclusive_extremes(board, tapes, observer)?;
                format!("{} {}", outcome.min, outcome.max)
            }
        };
        Ok(answer)
    }

    /// Solve `variant` and wrap the answer with input metadata
    pub fn report(&self, variant: Variant, board: &Board, tapes: &[Tape]) -> DropResult<SolveReport> {
        let answer = self.solve(variant, board, tapes)?;
        Ok(SolveReport::new(variant, answer, board, tapes, &self.config))
    }
}

fn require_tokens(tapes: &[Tape], required: usize) -> DropResult<()> {
    if tapes.len() < required {
        return Err(DropError::InsufficientTokens {
            required,
            available: tapes.len(),
        });
    }
    Ok(())
}

/// Variant A with the default configuration: decimal total
pub fn solve_variant_a(board: &Board, tapes: &[Tape]) -> DropResult<String> {
    Solver::default().solve(Variant::A, board, tapes)
}

/// Variant B with the default configuration: decimal total
pub fn solve_variant_b(board: &Board, tapes: &[Tape]) -> DropResult<String> {
    Solver::default().solve(Variant::B, board, tapes)
}

/// Variant C with the default configuration: `"min max"`
pub fn solve_variant_c(board: &Board, tapes: &[Tape]) -> DropResult<String> {
    Solver::default().solve(Variant::C, board, tapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::RecordingObserver;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("A".parse::<Variant>().unwrap(), Variant::A);
        assert_eq!("2".parse::<Variant>().unwrap(), Variant::B);
        assert_eq!("c".parse::<Variant>().unwrap(), Variant::C);
        assert!("d".parse::<Variant>().is_err());
        assert_eq!(Variant::B.to_string(), "b");
    }

    #[test]
    fn test_solver_rejects_invalid_config() {
        let config = SolverConfig {
            best_of_candidates: 0,
            ..SolverConfig::default()
        };
        assert!(matches!(Solver::new(config), Err(DropError::InvalidConfig(_))));
    }

    #[test]
    fn test_best_of_n_without_tapes_is_zero() {
        let board = Board::from_lines(["*.*.*.*.*.*.*.*.*.*.*.*.*"]).unwrap();
        let mut observer = RecordingObserver::default();
        let total = Solver::default()
            .best_of_n_total(&board, &[], &mut observer)
            .unwrap();
        assert_eq!(total, 0);
        assert!(observer.evaluations.is_empty());
        assert_eq!(solve_variant_b(&board, &[]).unwrap(), "0");
    }
}
