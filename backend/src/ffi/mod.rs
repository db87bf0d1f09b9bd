//! PyO3 bindings
//!
//! Exposes the three variant entry points to Python. Board rows and tapes
//! cross the boundary as lists of strings; every `DropError` becomes a
//! `ValueError`.
//!
//! ```python
//! from pegboard_core_rs import solve_variant_c
//!
//! answer = solve_variant_c(board_rows, tapes)  # "min max"
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::config::SolverConfig;
use crate::core::error::DropError;
use crate::models::{Board, Tape};
use crate::solver::{Solver, Variant};

fn to_py_err(err: DropError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

fn parse_inputs(board: Vec<String>, tapes: Vec<String>) -> PyResult<(Board, Vec<Tape>)> {
    let board = Board::from_lines(board).map_err(to_py_err)?;
    let tapes = Tape::parse_all(tapes).map_err(to_py_err)?;
    Ok((board, tapes))
}

fn run(
    variant: Variant,
    board: Vec<String>,
    tapes: Vec<String>,
    config: SolverConfig,
) -> PyResult<String> {
    let (board, tapes) = parse_inputs(board, tapes)?;
    let solver = Solver::new(config).map_err(to_py_err)?;
    solver.solve(variant, &board, &tapes).map_err(to_py_err)
}

#[pyfunction]
pub fn solve_variant_a(board: Vec<String>, tapes: Vec<String>) -> PyResult<String> {
    run(Variant::A, board, tapes, SolverConfig::default())
}

#[pyfunction]
pub fn solve_variant_b(board: Vec<String>, tapes: Vec<String>) -> PyResult<String> {
    run(Variant::B, board, tapes, SolverConfig::default())
}

#[pyfunction]
pub fn solve_variant_c(board: Vec<String>, tapes: Vec<String>) -> PyResult<String> {
    run(Variant::C, board, tapes, SolverConfig::default())
}

/// Solve any variant with a JSON solver configuration
#[pyfunction]
#[pyo3(signature = (variant, board, tapes, config_json=None))]
pub fn solve(
    variant: &str,
    board: Vec<String>,
    tapes: Vec<String>,
    config_json: Option<&str>,
) -> PyResult<String> {
    let variant: Variant = variant.parse().map_err(PyErr::new::<PyValueError, _>)?;
    let config = match config_json {
        Some(json) => serde_json::from_str(json)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("Invalid config JSON: {}", e)))?,
        None => SolverConfig::default(),
    };
    run(variant, board, tapes, config)
}
