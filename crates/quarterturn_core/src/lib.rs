//! Logical state model for a 3x3x3 twisty puzzle.
//!
//! This crate knows nothing about animation or rendering: it owns the 26
//! [`Cubelet`]s, answers face-membership queries, applies quarter turns, and
//! commits world-space transforms back onto the lattice. The incremental
//! rotation machinery lives in `quarterturn_engine`.

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

pub mod cube;
pub mod cubelet;
pub mod face;
pub mod math;
pub mod moves;
pub mod scramble;

pub use cube::{CubeState, PoseCountError};
pub use cubelet::{Cubelet, CubeletId, FaceColor};
pub use face::{Axis, Face, FaceMap};
pub use math::{EPSILON, Float};
pub use moves::Move;
pub use scramble::ScrambleParams;
