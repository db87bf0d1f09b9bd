//! Instruction tape model
//!
//! Each token carries its own tape of Left/Right instructions. A tape is
//! consumed one symbol per peg encounter and wraps around when exhausted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{DropError, DropResult};

/// Deflection applied when a token hits a peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// Non-empty, cyclically read instruction sequence
///
/// # Example
/// ```
/// use pegboard_core_rs::{Direction, Tape};
///
/// let tape = Tape::parse("LRR").unwrap();
/// assert_eq!(tape.len(), 3);
/// assert_eq!(tape.instruction_at(0), Direction::Left);
/// assert_eq!(tape.instruction_at(4), Direction::Right);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tape {
    directions: Vec<Direction>,
}

impl Tape {
    /// Wrap a list of directions
    ///
    /// # Errors
    /// `EmptyTape` when `directions` is empty. A standalone tape reports
    /// itself as token 0.
    pub fn new(directions: Vec<Direction>) -> DropResult<Self> {
        if directions.is_empty() {
            return Err(DropError::EmptyTape { token: 0 });
        }
        Ok(Self { directions })
    }

    /// Parse a tape from its `L`/`R` text form
    pub fn parse(text: &str) -> DropResult<Self> {
        Self::parse_token(0, text)
    }

    /// Parse the tape belonging to `token`, so errors name the token
    pub fn parse_token(token: usize, text: &str) -> DropResult<Self> {
        let directions = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Direction::from_symbol(symbol).ok_or(DropError::InvalidInstruction {
                    token,
                    position,
                    symbol,
                })
            })
            .collect::<DropResult<Vec<_>>>()?;

        if directions.is_empty() {
            return Err(DropError::EmptyTape { token });
        }
        Ok(Self { directions })
    }

    /// Parse one tape per line, indexing tokens in input order
    pub fn parse_all<I, S>(lines: I) -> DropResult<Vec<Tape>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(token, line)| Self::parse_token(token, line.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Always false: every constructor rejects empty tapes
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Instruction at `position`, wrapping modulo the tape length
    pub fn instruction_at(&self, position: usize) -> Direction {
        self.directions[position % self.directions.len()]
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in &self.directions {
            write!(f, "{}", direction.symbol())?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Tape {
    type Error = DropError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Tape::parse(&text)
    }
}

impl From<Tape> for String {
    fn from(tape: Tape) -> Self {
        tape.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tape_rejected() {
        assert_eq!(Tape::new(vec![]), Err(DropError::EmptyTape { token: 0 }));
        assert_eq!(
            Tape::parse_token(3, ""),
            Err(DropError::EmptyTape { token: 3 })
        );
    }

    #[test]
    fn test_unknown_symbol_reports_position() {
        let err = Tape::parse_token(2, "LRX").unwrap_err();
        assert_eq!(
            err,
            DropError::InvalidInstruction {
                token: 2,
                position: 2,
                symbol: 'X'
            }
        );
    }

    #[test]
    fn test_display_round_trips_text() {
        let tape = Tape::parse("RRLRL").unwrap();
        assert_eq!(tape.to_string(), "RRLRL");
    }
}
