//! Peg Board Core - Rust Engine
//!
//! Deterministic simulation of tokens dropping through a peg board, plus
//! the search for the slot assignment that extremizes total payout.
//!
//! # Architecture
//!
//! - **core**: Error taxonomy and solver configuration
//! - **models**: Domain types (Board, Tape, PayoutTable)
//! - **simulation**: Trajectory simulator and instrumentation hook
//! - **assignment**: Exclusive slot assignment searches
//! - **solver**: The three variant entry points and reports
//!
//! # Critical Invariants
//!
//! 1. Simulation is deterministic: same board, tape and slot, same exit
//! 2. A token never leaves the board; walls bounce it back inward
//! 3. Payouts are never negative
//! 4. Inputs are validated before any simulation; no partial results

// Module declarations
pub mod assignment;
pub mod core;
pub mod models;
pub mod simulation;
pub mod solver;

// Re-exports for convenience
pub use assignment::{AssignmentOutcome, AssignmentSearch};
pub use crate::core::{AssignmentStrategy, DropError, DropResult, SolverConfig};
pub use models::{payout, Board, Direction, PayoutTable, Tape, PEG};
pub use simulation::{
    simulate, simulate_from_column, trace, Evaluation, LogObserver, NoopObserver, Observer,
    RecordingObserver, Trajectory, TrajectoryState,
};
pub use solver::{
    input_digest, solve_variant_a, solve_variant_b, solve_variant_c, SolveReport, Solver, Variant,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn pegboard_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::solve_variant_a, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::solve_variant_b, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::solve_variant_c, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::solve, m)?)?;
    Ok(())
}
