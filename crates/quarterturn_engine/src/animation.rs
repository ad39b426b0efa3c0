//! The one in-flight rotation.

use cgmath::{One, Quaternion, Rad, Rotation3};
use quarterturn_core::cube::FaceGrip;
use quarterturn_core::math::COMMIT_EPSILON;
use quarterturn_core::{CubeletId, Float, Move};

/// A face rotation in progress: the gripped cubelets, how far the transient
/// group has turned, and how far it has to go.
///
/// While one of these exists the gripped cubelets' registry positions are
/// stale; the accumulated `rotation` is the only source of their world-space
/// transforms until commit.
#[derive(Debug, Clone)]
pub(crate) struct ActiveRotation {
    mv: Move,
    grip: FaceGrip,
    target: Rad<Float>,
    current: Rad<Float>,
    rotation: Quaternion<Float>,
}

impl ActiveRotation {
    pub fn new(mv: Move, grip: FaceGrip) -> Self {
        ActiveRotation {
            mv,
            grip,
            target: mv.angle(),
            current: Rad(0.0),
            rotation: Quaternion::one(),
        }
    }

    pub fn mv(&self) -> Move {
        self.mv
    }
    pub fn grip(&self) -> &[CubeletId] {
        &self.grip
    }
    pub fn rotation(&self) -> Quaternion<Float> {
        self.rotation
    }
    pub fn is_gripping(&self, id: CubeletId) -> bool {
        self.grip.contains(&id)
    }

    /// Advances the rotation by at most `max_step` radians. Returns whether
    /// the rotation has reached its target and is ready to commit.
    ///
    /// The step is clamped to the remaining angle, so convergence is
    /// monotonic with no overshoot regardless of how often this is called.
    pub fn proceed(&mut self, max_step: Rad<Float>) -> bool {
        let remaining = self.target - self.current;
        let step = Rad(remaining.0.signum() * remaining.0.abs().min(max_step.0.abs()));
        self.apply(step);
        (self.current - self.target).0.abs() < COMMIT_EPSILON
    }

    /// Rotates the last residual so the group lands exactly on the target
    /// angle before its transform is read back.
    pub fn finish(&mut self) {
        self.apply(self.target - self.current);
    }

    fn apply(&mut self, step: Rad<Float>) {
        let axis = self.mv.face.axis().unit();
        self.rotation = Quaternion::from_axis_angle(axis, step) * self.rotation;
        self.current += step;
    }
}
