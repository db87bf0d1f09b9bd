//! Trajectory simulator
//!
//! Walks one token down the board, row by row:
//!
//! 1. If the current cell is a peg, read the next tape instruction
//!    (wrapping at the end of the tape) and move one column left or right.
//! 2. Apply the wall policy: a token pushed off the left edge lands on
//!    column 1, a token pushed off the right edge lands on `width - 2`.
//! 3. Advance to the next row.
//!
//! After the last row the token exits into slot `column / 2 + 1`.
//!
//! # Example
//!
//! ```rust
//! use pegboard_core_rs::{simulate, Board, Tape};
//!
//! let board = Board::from_lines(["*.*.*", ".....", "*.*.*"]).unwrap();
//! let tape = Tape::parse("RL").unwrap();
//!
//! // Slot 2 (column 2): peg -> R -> column 3, empty, empty -> slot 2
//! assert_eq!(simulate(&board, &tape, 2).unwrap(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{DropError, DropResult};
use crate::models::{Board, Direction, Tape};

/// Position of a token between two rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryState {
    /// Current column (zero-based)
    pub column: usize,

    /// Next row to examine; equals the board height once finished
    pub row: usize,

    /// Next tape position to read
    pub tape_position: usize,
}

/// Step-by-step walk of one token
///
/// Yields the state after each row. The walk is finished once every row
/// has been examined.
#[derive(Debug, Clone)]
pub struct Trajectory<'a> {
    board: &'a Board,
    tape: &'a Tape,
    state: TrajectoryState,
}

impl<'a> Trajectory<'a> {
    /// Start a token at a raw column
    ///
    /// # Errors
    /// `InvalidSlot` when the column is not on the board.
    pub fn from_column(board: &'a Board, tape: &'a Tape, column: usize) -> DropResult<Self> {
        if column >= board.width() {
            return Err(DropError::InvalidSlot {
                slot: column / 2 + 1,
                total_slots: board.total_slots(),
            });
        }
        Ok(Self {
            board,
            tape,
            state: TrajectoryState {
                column,
                row: 0,
                tape_position: 0,
            },
        })
    }

    /// Start a token at a 1-based slot
    pub fn from_slot(board: &'a Board, tape: &'a Tape, slot: usize) -> DropResult<Self> {
        let column = board.slot_to_column(slot)?;
        Self::from_column(board, tape, column)
    }

    pub fn state(&self) -> TrajectoryState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.row >= self.board.height()
    }

    /// Slot the token currently drains into
    pub fn exit_slot(&self) -> usize {
        self.board.column_to_slot(self.state.column)
    }

    /// Process the current row; returns false once the walk is finished
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        let TrajectoryState {
            column,
            row,
            tape_position,
        } = self.state;

        if self.board.is_peg(row, column) {
            let shifted = match self.tape.instruction_at(tape_position) {
                Direction::Left => column as isize - 1,
                Direction::Right => column as isize + 1,
            };
            self.state.column = clamp_to_walls(shifted, self.board.width());
            self.state.tape_position = (tape_position + 1) % self.tape.len();
        }
        self.state.row += 1;
        true
    }

    /// Run to the bottom and return the exit slot
    pub fn finish(mut self) -> usize {
        while self.step() {}
        self.exit_slot()
    }
}

impl Iterator for Trajectory<'_> {
    type Item = TrajectoryState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step() {
            Some(self.state)
        } else {
            None
        }
    }
}

/// Wall policy applied right after a bounce
///
/// `-1` becomes `1` and `width` becomes `width - 2`. The result is then
/// held inside the board so one- and two-column boards stay addressable.
pub fn clamp_to_walls(column: isize, width: usize) -> usize {
    let width = width as isize;
    let column = if column < 0 {
        1
    } else if column == width {
        width - 2
    } else {
        column
    };
    column.clamp(0, width - 1) as usize
}

/// Exit slot for a token entering at a 1-based slot
///
/// # Errors
/// `InvalidSlot` when `starting_slot` is outside `[1, total_slots]`.
pub fn simulate(board: &Board, tape: &Tape, starting_slot: usize) -> DropResult<usize> {
    Ok(Trajectory::from_slot(board, tape, starting_slot)?.finish())
}

/// Exit slot for a token entering at a raw column
///
/// Used by the fixed-position variant, which numbers its entry points by
/// column rather than by slot.
pub fn simulate_from_column(board: &Board, tape: &Tape, column: usize) -> DropResult<usize> {
    Ok(Trajectory::from_column(board, tape, column)?.finish())
}

/// Every state of a drop, starting with the entry state
pub fn trace(board: &Board, tape: &Tape, starting_slot: usize) -> DropResult<Vec<TrajectoryState>> {
    let trajectory = Trajectory::from_slot(board, tape, starting_slot)?;
    let mut states = vec![trajectory.state()];
    states.extend(trajectory);
    Ok(states)
}
