//! Error taxonomy and solver configuration

pub mod config;
pub mod error;

pub use config::{AssignmentStrategy, SolverConfig};
pub use error::{DropError, DropResult};
