//! Puzzle input splitting
//!
//! A puzzle file holds the board rows, one blank line, then one tape per
//! line. Validation of the pieces is left to the core constructors.

use anyhow::{bail, Result};
use pegboard_core_rs::{Board, Tape};

/// Board rows and tape lines, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPuzzle<'a> {
    pub board: Vec<&'a str>,
    pub tapes: Vec<&'a str>,
}

/// Split raw text at the first blank line
///
/// Trailing `\r` is stripped from every line. Blank lines after the
/// separator are ignored.
pub fn split_sections(text: &str) -> Result<RawPuzzle<'_>> {
    let mut board = Vec::new();
    let mut tapes = Vec::new();
    let mut in_tapes = false;

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            in_tapes = true;
            continue;
        }
        if in_tapes {
            tapes.push(line);
        } else {
            board.push(line);
        }
    }

    if board.is_empty() {
        bail!("puzzle has no board rows");
    }
    if !in_tapes {
        bail!("puzzle has no blank line separating the board from the tapes");
    }
    if tapes.is_empty() {
        bail!("puzzle has no tapes after the blank line");
    }
    Ok(RawPuzzle { board, tapes })
}

/// Split and validate a puzzle
pub fn parse_puzzle(text: &str) -> Result<(Board, Vec<Tape>)> {
    let raw = split_sections(text)?;
    let board = Board::from_lines(&raw.board)?;
    let tapes = Tape::parse_all(&raw.tapes)?;
    log::debug!(
        "parsed board {}x{} ({} slots) with {} tapes",
        board.height(),
        board.width(),
        board.total_slots(),
        tapes.len()
    );
    Ok((board, tapes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sections() {
        let raw = split_sections("*.*\n.*.\n\nLR\nRRL\n").unwrap();
        assert_eq!(raw.board, vec!["*.*", ".*."]);
        assert_eq!(raw.tapes, vec!["LR", "RRL"]);
    }

    #[test]
    fn test_crlf_input() {
        let raw = split_sections("*.*\r\n\r\nL\r\n").unwrap();
        assert_eq!(raw.board, vec!["*.*"]);
        assert_eq!(raw.tapes, vec!["L"]);
    }

    #[test]
    fn test_missing_separator() {
        let err = split_sections("*.*\n.*.").unwrap_err();
        assert!(err.to_string().contains("no blank line"));
    }

    #[test]
    fn test_missing_tapes() {
        assert!(split_sections("*.*\n\n").is_err());
    }

    #[test]
    fn test_parse_puzzle_surfaces_core_errors() {
        let err = parse_puzzle("*.*\n.*\n\nL\n").unwrap_err();
        assert!(err.to_string().contains("Malformed board"));

        let err = parse_puzzle("*.*\n\nLQ\n").unwrap_err();
        assert!(err.to_string().contains("invalid instruction"));
    }

    #[test]
    fn test_parse_puzzle() {
        let (board, tapes) = parse_puzzle("*.*.*\n.*.*.\n\nLR\nRL\n").unwrap();
        assert_eq!(board.total_slots(), 3);
        assert_eq!(tapes.len(), 2);
        assert_eq!(tapes[1].to_string(), "RL");
    }
}
