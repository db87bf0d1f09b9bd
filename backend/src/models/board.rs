//! Board model
//!
//! A rectangular grid of cells. A cell holding `*` is a peg, anything
//! else is empty space. Columns are zero-based and only even columns are
//! slots: slot `s` (1-based) sits at column `2 * (s - 1)`.
//!
//! The board is validated once at construction and is immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::core::error::{DropError, DropResult};

/// Character marking a peg cell
pub const PEG: char = '*';

/// Immutable peg board
///
/// # Example
/// ```
/// use pegboard_core_rs::Board;
///
/// let board = Board::from_lines(["*.*.*", ".*.*."]).unwrap();
/// assert_eq!(board.width(), 5);
/// assert_eq!(board.height(), 2);
/// assert_eq!(board.total_slots(), 3);
/// assert!(board.is_peg(0, 2));
/// assert!(!board.is_peg(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    /// Rows from top (row 0) to bottom
    rows: Vec<Vec<char>>,

    /// Shared row width
    width: usize,
}

impl Board {
    /// Build a board from already-split rows
    ///
    /// # Errors
    /// `MalformedBoard` when there are no rows, the rows are zero-width,
    /// or the rows differ in width.
    pub fn new(rows: Vec<Vec<char>>) -> DropResult<Self> {
        let width = match rows.first() {
            Some(first) => first.len(),
            None => return Err(DropError::malformed("board has no rows")),
        };
        if width == 0 {
            return Err(DropError::malformed("board rows are empty"));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(DropError::malformed(format!(
                "row {} has width {}, expected {}",
                index,
                row.len(),
                width
            )));
        }

        Ok(Self { rows, width })
    }

    /// Build a board from text lines, one character per cell
    pub fn from_lines<I, S>(lines: I) -> DropResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        Self::new(rows)
    }

    /// Row width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of landing slots: `(width + 1) / 2`
    pub fn total_slots(&self) -> usize {
        (self.width + 1) / 2
    }

    /// Whether the cell at (row, column) is a peg
    ///
    /// Out-of-range coordinates are never pegs.
    pub fn is_peg(&self, row: usize, column: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or(false, |&cell| cell == PEG)
    }

    pub fn row(&self, index: usize) -> Option<&[char]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Column of a 1-based slot
    ///
    /// # Errors
    /// `InvalidSlot` when the slot is outside `[1, total_slots]`.
    pub fn slot_to_column(&self, slot: usize) -> DropResult<usize> {
        if slot == 0 || slot > self.total_slots() {
            return Err(DropError::InvalidSlot {
                slot,
                total_slots: self.total_slots(),
            });
        }
        Ok((slot - 1) * 2)
    }

    /// Slot a column drains into (`column / 2 + 1`)
    pub fn column_to_slot(&self, column: usize) -> usize {
        column / 2 + 1
    }

    /// Total number of peg cells
    pub fn peg_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|&&c| c == PEG).count())
            .sum()
    }

    /// Rows rendered back to text
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.iter().collect()).collect()
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = DropError;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        Board::from_lines(lines)
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.lines()
    }
}
