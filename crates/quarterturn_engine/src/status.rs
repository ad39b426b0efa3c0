//! Engine lifecycle status, surfaced to the collaborating UI.

use std::fmt;

use quarterturn_core::Move;

/// What the engine is doing, as the surrounding UI should describe it.
///
/// Precondition failures (moving while busy, solving with nothing recorded)
/// are reported here rather than as errors; see the facade's `bool` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineStatus {
    /// Idle; controls may be enabled.
    Ready,
    /// A single requested rotation is in flight.
    Rotating(Move),
    /// A scramble sequence is executing.
    Scrambling,
    /// A scramble finished and its history is available for solving.
    ReadyToSolve,
    /// The recorded scramble is being replayed in reverse.
    Solving,
    /// An inverse replay finished; the cube is back to solved.
    Solved,
    /// The last user move was undone.
    MoveUndone,
    /// A solve was requested with no recorded scramble to invert.
    NothingToSolve,
    /// The cube was rebuilt from scratch.
    Reset,
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineStatus::Ready => write!(f, "Ready"),
            EngineStatus::Rotating(mv) => write!(f, "Rotating {mv}..."),
            EngineStatus::Scrambling => write!(f, "Scrambling..."),
            EngineStatus::ReadyToSolve => write!(f, "Scrambled! Ready to solve"),
            EngineStatus::Solving => write!(f, "Auto-solving..."),
            EngineStatus::Solved => write!(f, "Solved!"),
            EngineStatus::MoveUndone => write!(f, "Move undone"),
            EngineStatus::NothingToSolve => write!(f, "Nothing to solve!"),
            EngineStatus::Reset => write!(f, "Reset complete"),
        }
    }
}

/// Callback invoked on every status transition with the new status and
/// whether the engine is busy. UIs use the busy flag to disable their
/// controls while a rotation is in flight.
pub type StatusCallback = Box<dyn FnMut(&EngineStatus, bool)>;
