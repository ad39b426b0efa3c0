//! The cubelet registry: 26 cubelets and the operations that read and commit
//! their lattice state.

use cgmath::{Quaternion, Rotation, Rotation3, Vector3, vec3};
use itertools::iproduct;
use smallvec::SmallVec;

use crate::cubelet::{Cubelet, CubeletId};
use crate::face::Face;
use crate::math::{self, Float};
use crate::moves::Move;

/// Cubelet IDs gripped by one face, sized for the 9 a face always has.
pub type FaceGrip = SmallVec<[CubeletId; 9]>;

/// Logical state of the whole cube.
///
/// Cubelets are created once at construction in a fixed order (the same order
/// every [`CubeState`] uses, which is what makes saved states portable) and
/// destroyed wholesale on reset. At all times exactly one cubelet occupies
/// each of the 26 lattice coordinates, except transiently between the
/// per-cubelet commits of a finishing rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState {
    cubelets: Vec<Cubelet>,
}

impl CubeState {
    /// Constructs a solved cube: 27 lattice points minus the invisible
    /// center.
    pub fn new_solved() -> Self {
        let cubelets = iproduct!(-1..=1, -1..=1, -1..=1)
            .filter(|&(x, y, z)| (x, y, z) != (0, 0, 0))
            .map(|(x, y, z)| Cubelet::new(vec3(x as Float, y as Float, z as Float)))
            .collect();
        CubeState { cubelets }
    }

    /// Returns the number of cubelets (always 26).
    pub fn len(&self) -> usize {
        self.cubelets.len()
    }
    /// Returns whether the registry is empty. It never is; this exists for
    /// the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.cubelets.is_empty()
    }

    /// Returns a cubelet by ID.
    pub fn get(&self, id: CubeletId) -> &Cubelet {
        &self.cubelets[id.0 as usize]
    }

    /// Iterates over all cubelets in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeletId, &Cubelet)> {
        self.cubelets
            .iter()
            .enumerate()
            .map(|(i, c)| (CubeletId(i as u8), c))
    }

    /// Returns the IDs of the 9 cubelets in `face`'s layer.
    pub fn select_face(&self, face: Face) -> FaceGrip {
        self.iter()
            .filter(|(_, c)| face.contains(c.position()))
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns the cubelet currently occupying a lattice coordinate, if the
    /// coordinate is occupied.
    pub fn at_position(&self, position: Vector3<Float>) -> Option<&Cubelet> {
        self.cubelets
            .iter()
            .find(|c| math::approx_eq_vec(c.position(), position))
    }

    /// Stores a world-space position on a cubelet, snapped to the nearest
    /// lattice integer.
    pub fn commit_position(&mut self, id: CubeletId, raw: Vector3<Float>) {
        self.cubelets[id.0 as usize].set_position(math::snap_to_lattice(raw));
    }

    /// Composes a finished rotation group's orientation onto a cubelet's
    /// accumulated orientation. The group rotation is applied outermost: the
    /// cubelet was carried by this turn on top of whatever it already had.
    pub fn commit_orientation(&mut self, id: CubeletId, group: Quaternion<Float>) {
        let c = &mut self.cubelets[id.0 as usize];
        let composed = group * c.orientation();
        c.set_orientation(composed);
    }

    /// Applies a quarter turn to the cube state instantly, with no animation.
    ///
    /// This is the same rotation-then-commit sequence the animated path
    /// performs, collapsed to a single step.
    pub fn apply_move(&mut self, mv: Move) {
        let rotation = Quaternion::from_axis_angle(mv.face.axis().unit(), mv.angle());
        for id in self.select_face(mv.face) {
            let world = rotation.rotate_vector(self.get(id).position());
            self.commit_position(id, world);
            self.commit_orientation(id, rotation);
        }
        self.check_lattice_bijection();
    }

    /// Returns whether every cubelet is at its home coordinate with an
    /// identity orientation.
    pub fn is_solved(&self) -> bool {
        self.cubelets.iter().all(Cubelet::is_home)
    }

    /// Verifies that the 26 cubelets occupy 26 distinct lattice coordinates.
    ///
    /// A violation is latent corruption with no self-healing path (only a
    /// reset clears it), so it panics in debug builds and logs in release
    /// builds. Call only between rotations, never mid-commit.
    pub fn check_lattice_bijection(&self) {
        let mut seen = [false; 27];
        for c in &self.cubelets {
            let p = c.position();
            let key = ((p.x + 1.0) * 9.0 + (p.y + 1.0) * 3.0 + (p.z + 1.0)) as usize;
            let in_lattice = p.x.abs() <= 1.0 && p.y.abs() <= 1.0 && p.z.abs() <= 1.0;
            if !in_lattice || seen[key] {
                debug_panic!("cubelet registry corrupt: duplicate or off-lattice {p:?}");
                return;
            }
            seen[key] = true;
        }
    }

    /// Returns every cubelet's (position, orientation) in creation order.
    pub fn poses(&self) -> Vec<(Vector3<Float>, Quaternion<Float>)> {
        self.cubelets
            .iter()
            .map(|c| (c.position(), c.orientation()))
            .collect()
    }

    /// Overwrites every cubelet's (position, orientation) from a snapshot
    /// taken by [`CubeState::poses`] on a cube with the same creation order.
    pub fn restore_poses(
        &mut self,
        poses: &[(Vector3<Float>, Quaternion<Float>)],
    ) -> Result<(), PoseCountError> {
        if poses.len() != self.cubelets.len() {
            return Err(PoseCountError {
                expected: self.cubelets.len(),
                got: poses.len(),
            });
        }
        for (c, &(position, orientation)) in self.cubelets.iter_mut().zip(poses) {
            c.set_position(position);
            c.set_orientation(orientation);
        }
        Ok(())
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new_solved()
    }
}

/// Error restoring a snapshot whose cubelet count does not match the
/// registry.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("expected {expected} cubelet poses, got {got}")]
pub struct PoseCountError {
    /// Number of cubelets in the registry.
    pub expected: usize,
    /// Number of poses in the snapshot.
    pub got: usize,
}
