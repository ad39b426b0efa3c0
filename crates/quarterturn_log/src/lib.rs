//! Move notation and saved cube states.

pub mod notation;
mod state;

pub use state::{RestoreError, SavedCube, SavedCubelet};
