//! Single-flight rotation execution over an ordered move queue.

use std::collections::VecDeque;

use cgmath::{Rad, Rotation};
use quarterturn_core::{CubeState, Float, Move};

use crate::animation::ActiveRotation;

/// Owns the move queue and the at-most-one rotation in flight.
///
/// Requested rotations are serialized: the queue holds pending moves in
/// order, and a new rotation begins only when the previous one has committed.
#[derive(Debug, Default)]
pub(crate) struct RotationExecutor {
    queue: VecDeque<Move>,
    active: Option<ActiveRotation>,
}

/// What happened during one executor step.
pub(crate) enum StepEvent {
    /// Nothing in flight and nothing queued.
    Idle,
    /// A rotation advanced but has not reached its target.
    Animating,
    /// A rotation committed this step.
    Committed {
        /// The move that committed.
        finished: Move,
        /// Whether the queue was empty afterwards (no follow-up rotation was
        /// begun).
        queue_drained: bool,
    },
}

impl RotationExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any rotation is in flight or queued. Every public
    /// entry point checks this before mutating engine state; it is the only
    /// ordering primitive in the engine.
    pub fn is_busy(&self) -> bool {
        self.active.is_some() || !self.queue.is_empty()
    }

    pub fn active(&self) -> Option<&ActiveRotation> {
        self.active.as_ref()
    }

    /// Appends a move to the queue without starting it.
    pub fn enqueue(&mut self, mv: Move) {
        self.queue.push_back(mv);
    }

    /// Begins the next queued move if nothing is in flight. Returns the move
    /// begun, if any.
    pub fn kick(&mut self, cube: &CubeState) -> Option<Move> {
        while self.active.is_none() {
            let mv = self.queue.pop_front()?;
            if self.begin(cube, mv) {
                return Some(mv);
            }
        }
        None
    }

    /// Detaches the face's cubelets into a new rotation group. Fails (and
    /// returns `false`) if a rotation is already in flight or the face grips
    /// nothing; the caller is expected to have checked [`Self::is_busy`].
    fn begin(&mut self, cube: &CubeState, mv: Move) -> bool {
        if self.active.is_some() {
            return false;
        }
        let grip = cube.select_face(mv.face);
        if grip.is_empty() {
            log::error!("face {} grips no cubelets", mv.face);
            return false;
        }
        log::trace!("beginning rotation {mv}");
        self.active = Some(ActiveRotation::new(mv, grip));
        true
    }

    /// Advances the in-flight rotation by one frame's fixed angular step and
    /// commits it if it reached its target. On commit, the next queued move
    /// begins immediately.
    pub fn step(&mut self, cube: &mut CubeState, max_step: Rad<Float>) -> StepEvent {
        let Some(active) = &mut self.active else {
            // A non-empty queue with nothing in flight only happens if a
            // caller enqueued without kicking; recover rather than stall.
            return match self.kick(cube) {
                Some(_) => StepEvent::Animating,
                None => StepEvent::Idle,
            };
        };

        if !active.proceed(max_step) {
            return StepEvent::Animating;
        }

        active.finish();
        let rotation = active.rotation();
        let finished = active.mv();
        for &id in active.grip() {
            let world = rotation.rotate_vector(cube.get(id).position());
            cube.commit_position(id, world);
            cube.commit_orientation(id, rotation);
        }
        cube.check_lattice_bijection();
        self.active = None;
        log::trace!("committed rotation {finished}");

        let queue_drained = self.kick(cube).is_none();
        StepEvent::Committed {
            finished,
            queue_drained,
        }
    }

    /// Forcibly discards the queue and any rotation in flight. The cube is
    /// left exactly as of the last commit; only a registry rebuild makes this
    /// safe, which is why it is reserved for reset.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.active = None;
    }
}
