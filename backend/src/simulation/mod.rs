//! Trajectory simulation
//!
//! The simulator is deterministic: the same board, tape and starting slot
//! always produce the same exit slot.

pub mod observer;
pub mod trajectory;

pub use observer::{Evaluation, LogObserver, NoopObserver, Observer, RecordingObserver};
pub use trajectory::{
    clamp_to_walls, simulate, simulate_from_column, trace, Trajectory, TrajectoryState,
};
