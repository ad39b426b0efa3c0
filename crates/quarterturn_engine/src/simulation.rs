//! The engine facade: the single entry point every collaborator goes
//! through.

use cgmath::{Quaternion, Rad, Rotation, Vector3};
use quarterturn_core::{CubeState, Face, Float, Move, ScrambleParams};
use quarterturn_log::{RestoreError, SavedCube};
use web_time::Duration;

use crate::executor::{RotationExecutor, StepEvent};
use crate::prefs::EnginePreferences;
use crate::status::{EngineStatus, StatusCallback};
use crate::timer::SolveTimer;

/// Which higher-level sequence the queue is currently executing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Sequence {
    Scramble,
    Solve,
}

/// One cube plus everything needed to animate and sequence its moves: the
/// cubelet registry, the rotation executor and its queue, the scramble and
/// undo histories, the move counter, and the status surface.
///
/// All state lives here, owned, so independent simulations coexist and tests
/// are deterministic. Every mutation happens on the caller's thread; the
/// busy flag (see [`CubeSimulation::busy`]) is the only ordering primitive.
pub struct CubeSimulation {
    cube: CubeState,
    executor: RotationExecutor,
    prefs: EnginePreferences,

    /// Moves applied by the most recent scramble, in execution order.
    /// Cleared on reset and on a completed solve.
    scramble_history: Vec<Move>,
    /// Moves requested directly by the user, for undo. Scramble-, solve-,
    /// and undo-driven moves are never recorded here.
    undo_history: Vec<Move>,
    /// Sequence the queue is working through, if any.
    sequence: Option<Sequence>,

    move_count: u32,
    status: EngineStatus,
    timer: SolveTimer,
    on_status: Option<StatusCallback>,
}

impl CubeSimulation {
    /// Constructs a solved cube with default preferences.
    pub fn new() -> Self {
        Self::with_prefs(EnginePreferences::default())
    }

    /// Constructs a solved cube with the given preferences.
    pub fn with_prefs(prefs: EnginePreferences) -> Self {
        CubeSimulation {
            cube: CubeState::new_solved(),
            executor: RotationExecutor::new(),
            prefs,
            scramble_history: vec![],
            undo_history: vec![],
            sequence: None,
            move_count: 0,
            status: EngineStatus::Ready,
            timer: SolveTimer::default(),
            on_status: None,
        }
    }

    /// Registers the callback invoked on every status transition.
    pub fn set_status_callback(&mut self, callback: impl FnMut(&EngineStatus, bool) + 'static) {
        self.on_status = Some(Box::new(callback));
    }

    /// Returns the logical cube state as of the last commit.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }
    /// Returns the current status.
    pub fn status(&self) -> &EngineStatus {
        &self.status
    }
    /// Returns whether a rotation is in flight or queued. While busy, every
    /// request entry point is a silent no-op.
    pub fn busy(&self) -> bool {
        self.executor.is_busy()
    }
    /// Returns the number of user moves since the last scramble or reset,
    /// net of undos.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
    /// Returns the moves applied by the most recent scramble.
    pub fn scramble_history(&self) -> &[Move] {
        &self.scramble_history
    }
    /// Returns the user moves available to undo, oldest first.
    pub fn user_history(&self) -> &[Move] {
        &self.undo_history
    }
    /// Returns time elapsed since the current scramble or solve started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.timer.elapsed()
    }
    /// Returns the engine preferences.
    pub fn prefs(&self) -> &EnginePreferences {
        &self.prefs
    }
    /// Returns the engine preferences for modification.
    pub fn prefs_mut(&mut self) -> &mut EnginePreferences {
        &mut self.prefs
    }
    /// Returns whether every cubelet is home as of the last commit.
    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Requests a single user move. Returns whether it was accepted; a
    /// request while busy is rejected with no state change.
    ///
    /// Accepted moves are recorded for undo and counted.
    pub fn request_move(&mut self, face: Face, clockwise: bool) -> bool {
        if self.busy() {
            log::trace!("rejecting move {face}: rotation in flight");
            return false;
        }
        let mv = Move::new(face, clockwise);
        self.executor.enqueue(mv);
        self.executor.kick(&self.cube);
        self.undo_history.push(mv);
        self.move_count += 1;
        self.set_status(EngineStatus::Rotating(mv));
        true
    }

    /// Undoes the most recent user move by requesting its inverse. No-op if
    /// busy or if there is nothing to undo.
    ///
    /// The inverse is not recorded back into the undo history, and the move
    /// counter goes back down by one.
    pub fn undo(&mut self) -> bool {
        if self.busy() {
            return false;
        }
        let Some(last) = self.undo_history.pop() else {
            return false;
        };
        self.executor.enqueue(last.rev());
        self.executor.kick(&self.cube);
        self.move_count = self.move_count.saturating_sub(1);
        self.set_status(EngineStatus::MoveUndone);
        true
    }

    /// Scrambles with a fresh random seed and the configured length.
    pub fn scramble(&mut self) -> bool {
        let length = self.prefs.scramble_length;
        self.scramble_with_params(ScrambleParams::new(length))
    }

    /// Scrambles with explicit parameters. No-op if busy.
    ///
    /// Both histories and the move counter are cleared, the generated
    /// sequence is recorded as the new scramble history, and the whole
    /// sequence is enqueued at once; each commit pulls the next move until
    /// the queue drains.
    pub fn scramble_with_params(&mut self, params: ScrambleParams) -> bool {
        if self.busy() {
            return false;
        }
        self.scramble_history.clear();
        self.undo_history.clear();
        self.move_count = 0;

        let moves = params.generate();
        log::trace!("scrambling with {} moves, seed {}", moves.len(), params.seed);
        if moves.is_empty() {
            self.set_status(EngineStatus::ReadyToSolve);
            return true;
        }
        self.scramble_history = moves.clone();
        for mv in moves {
            self.executor.enqueue(mv);
        }
        self.executor.kick(&self.cube);
        self.sequence = Some(Sequence::Scramble);
        self.timer.start();
        self.set_status(EngineStatus::Scrambling);
        true
    }

    /// Replays the recorded scramble in reverse with every move inverted.
    /// No-op if busy or if no scramble is recorded.
    ///
    /// This is only a solve because the busy gate guarantees nothing else
    /// touched the cube since the scramble: the engine is the sole source of
    /// its own moves.
    pub fn solve(&mut self) -> bool {
        if self.busy() || self.scramble_history.is_empty() {
            self.set_status(EngineStatus::NothingToSolve);
            return false;
        }
        let moves: Vec<Move> = self.scramble_history.iter().rev().map(|mv| mv.rev()).collect();
        for mv in moves {
            self.executor.enqueue(mv);
        }
        self.executor.kick(&self.cube);
        self.sequence = Some(Sequence::Solve);
        self.timer.start();
        self.set_status(EngineStatus::Solving);
        true
    }

    /// Advances the engine by one frame: steps the in-flight rotation by the
    /// fixed angular step, commits it on arrival, and starts the next queued
    /// move. Call once per rendered frame. Returns whether the cube moved
    /// and must be redrawn.
    pub fn step(&mut self) -> bool {
        let max_step = Rad(self.prefs.turn_rate);
        match self.executor.step(&mut self.cube, max_step) {
            StepEvent::Idle => false,
            StepEvent::Animating => true,
            StepEvent::Committed { queue_drained, .. } => {
                if queue_drained {
                    self.finish_queue();
                }
                true
            }
        }
    }

    /// Tears down any in-flight rotation along with the queue, histories,
    /// counter, and timer, and rebuilds the registry from scratch. The only
    /// recovery path from a corrupt or stuck state.
    pub fn reset(&mut self) {
        self.executor.clear();
        self.cube = CubeState::new_solved();
        self.scramble_history.clear();
        self.undo_history.clear();
        self.sequence = None;
        self.move_count = 0;
        self.timer.stop();
        self.set_status(EngineStatus::Reset);
    }

    /// Captures the cube state for persistence. Defined as of the last
    /// commit; call while idle for a state worth keeping.
    pub fn save_state(&self) -> SavedCube {
        SavedCube::from_state(&self.cube)
    }

    /// Replaces the cube state from a snapshot, tearing down any in-flight
    /// rotation and all histories first.
    pub fn restore_state(&mut self, saved: &SavedCube) -> Result<(), RestoreError> {
        self.reset();
        saved.apply_to(&mut self.cube)?;
        self.cube.check_lattice_bijection();
        self.set_status(EngineStatus::Ready);
        Ok(())
    }

    /// Returns every cubelet's world-space transform for rendering, with the
    /// in-flight rotation group's partial rotation applied to its grip.
    pub fn render_data(&self) -> Vec<(Vector3<Float>, Quaternion<Float>)> {
        self.cube
            .iter()
            .map(|(id, c)| match self.executor.active() {
                Some(active) if active.is_gripping(id) => {
                    let rotation = active.rotation();
                    (
                        rotation.rotate_vector(c.position()),
                        rotation * c.orientation(),
                    )
                }
                _ => (c.position(), c.orientation()),
            })
            .collect()
    }

    /// Runs after the last queued rotation commits: closes out whatever
    /// sequence was executing and tells the UI the engine is idle again.
    fn finish_queue(&mut self) {
        match self.sequence.take() {
            Some(Sequence::Scramble) => {
                self.timer.stop();
                self.set_status(EngineStatus::ReadyToSolve);
            }
            Some(Sequence::Solve) => {
                self.timer.stop();
                self.scramble_history.clear();
                self.undo_history.clear();
                if !self.cube.is_solved() {
                    log::error!("inverse replay did not return the cube to solved");
                }
                self.set_status(EngineStatus::Solved);
            }
            None => self.set_status(EngineStatus::Ready),
        }
    }

    fn set_status(&mut self, status: EngineStatus) {
        self.status = status;
        let busy = self.executor.is_busy();
        if let Some(callback) = &mut self.on_status {
            callback(&self.status, busy);
        }
    }
}

impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new()
    }
}
