//! Saved cube states.
//!
//! A saved state is the full (position, quaternion) list in cubelet creation
//! order. The restorer trusts that order: the only thing it validates is the
//! cubelet count.

use cgmath::{Quaternion, Vector3, vec3};
use quarterturn_core::{CubeState, Float, PoseCountError};
use serde::{Deserialize, Serialize};

/// Saved pose of a single cubelet.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct SavedCubelet {
    /// Lattice position.
    pub position: [Float; 3],
    /// Accumulated orientation as `[x, y, z, w]`.
    pub quaternion: [Float; 4],
}

/// Saved state of the whole cube, in cubelet creation order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedCube {
    /// One pose per cubelet.
    pub cubelets: Vec<SavedCubelet>,
}

impl SavedCube {
    /// Captures the current state of a cube.
    pub fn from_state(cube: &CubeState) -> Self {
        let cubelets = cube
            .poses()
            .into_iter()
            .map(|(p, q)| SavedCubelet {
                position: [p.x, p.y, p.z],
                quaternion: [q.v.x, q.v.y, q.v.z, q.s],
            })
            .collect();
        SavedCube { cubelets }
    }

    /// Overwrites a cube's state with this snapshot.
    pub fn apply_to(&self, cube: &mut CubeState) -> Result<(), RestoreError> {
        let poses: Vec<(Vector3<Float>, Quaternion<Float>)> = self
            .cubelets
            .iter()
            .map(|c| {
                let [x, y, z] = c.position;
                let [qx, qy, qz, qw] = c.quaternion;
                (vec3(x, y, z), Quaternion::new(qw, qx, qy, qz))
            })
            .collect();
        cube.restore_poses(&poses)?;
        Ok(())
    }

    /// Serializes to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserializes from JSON.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

/// Error restoring a saved cube.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RestoreError {
    #[error(transparent)]
    PoseCount(#[from] PoseCountError),
}
