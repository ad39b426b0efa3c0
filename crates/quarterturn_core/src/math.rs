//! Floating-point comparisons and rotation helpers.

use cgmath::{InnerSpace, Quaternion, Rad, Vector3};

/// Floating-point type used for cube geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Tolerance for face-membership tests against a lattice coordinate.
///
/// Committed positions are snapped to integers, but membership is still
/// tested with a generous window so that a mid-commit read can never select
/// the wrong layer.
pub const FACE_SELECT_EPSILON: Float = 0.1;

/// Angular window (radians) within which an in-progress rotation is
/// considered to have reached its target.
pub const COMMIT_EPSILON: Float = 0.001;

/// Angle of a quarter turn.
pub const QUARTER_TURN: Rad<Float> = Rad(std::f64::consts::FRAC_PI_2);

/// Compares two numbers, but considers them equal if they are separated by
/// less than [`EPSILON`].
pub fn approx_eq(a: Float, b: Float) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns whether two points are separated by less than [`EPSILON`] on every
/// axis.
pub fn approx_eq_vec(a: Vector3<Float>, b: Vector3<Float>) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

/// Returns whether a quaternion represents the identity rotation.
///
/// Both `1` and `-1` qualify; a double cover of the rotation group means four
/// quarter turns accumulate to `-1` even though the pieces are back where
/// they started.
pub fn is_identity_rotation(q: &Quaternion<Float>) -> bool {
    q.v.magnitude() < EPSILON
}

/// Returns whether two quaternions represent the same rotation, ignoring
/// sign.
pub fn rotation_approx_eq(a: &Quaternion<Float>, b: &Quaternion<Float>) -> bool {
    (a.dot(*b).abs() - 1.0).abs() < EPSILON
}

/// Snaps every coordinate to the nearest lattice integer.
///
/// Rounding, not truncation: accumulated rotation error must not survive into
/// subsequent face-membership tests.
pub fn snap_to_lattice(v: Vector3<Float>) -> Vector3<Float> {
    v.map(Float::round)
}
