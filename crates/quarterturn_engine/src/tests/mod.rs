//! Scenario tests driving the facade the way a frontend would: request,
//! tick, observe.

use std::cell::RefCell;
use std::rc::Rc;

use cgmath::vec3;
use pretty_assertions::assert_eq;
use quarterturn_core::math::{approx_eq_vec, rotation_approx_eq};
use quarterturn_core::{CubeState, Face, FaceColor, Move, ScrambleParams};

use crate::{CubeSimulation, EngineStatus};

/// Ticks until the engine goes idle, with a generous cap so a stuck rotation
/// fails the test instead of hanging it.
fn run_to_idle(sim: &mut CubeSimulation) {
    for _ in 0..100_000 {
        if !sim.busy() {
            return;
        }
        sim.step();
    }
    panic!("engine never went idle");
}

/// Compares two cube states up to floating-point drift and quaternion sign:
/// positions on the same lattice points, orientations the same rotation.
fn assert_same_cube(a: &CubeState, b: &CubeState) {
    for ((id, ca), (_, cb)) in a.iter().zip(b.iter()) {
        assert!(
            approx_eq_vec(ca.position(), cb.position()),
            "cubelet {id:?} position"
        );
        assert!(
            rotation_approx_eq(&ca.orientation(), &cb.orientation()),
            "cubelet {id:?} orientation"
        );
    }
}

#[test]
fn request_move_animates_then_commits() {
    let mut sim = CubeSimulation::new();
    assert!(sim.request_move(Face::R, true));
    assert!(sim.busy());
    assert_eq!(*sim.status(), EngineStatus::Rotating(sim.user_history()[0]));

    run_to_idle(&mut sim);
    assert!(!sim.is_solved());
    assert_eq!(*sim.status(), EngineStatus::Ready);
    assert_eq!(sim.move_count(), 1);
    sim.cube().check_lattice_bijection();
}

#[test]
fn requests_while_busy_are_rejected_with_no_state_change() {
    let mut sim = CubeSimulation::new();
    assert!(sim.request_move(Face::R, true));
    assert!(!sim.request_move(Face::U, true));
    assert!(!sim.undo());
    assert!(!sim.scramble());
    assert!(!sim.solve());

    assert_eq!(sim.user_history().len(), 1);
    assert_eq!(sim.move_count(), 1);
    run_to_idle(&mut sim);

    // Only the accepted R move happened.
    let mut expected = CubeState::new_solved();
    expected.apply_move(Move::new(Face::R, true));
    assert_same_cube(sim.cube(), &expected);
}

#[test]
fn move_then_inverse_restores_solved() {
    let mut sim = CubeSimulation::new();
    for &face in &[Face::R, Face::L, Face::U, Face::D, Face::F, Face::B] {
        assert!(sim.request_move(face, true));
        run_to_idle(&mut sim);
        assert!(sim.request_move(face, false));
        run_to_idle(&mut sim);
        assert!(sim.is_solved(), "face {face}");
    }
}

#[test]
fn four_quarter_turns_restore_solved() {
    let mut sim = CubeSimulation::new();
    for _ in 0..4 {
        assert!(sim.request_move(Face::F, true));
        run_to_idle(&mut sim);
    }
    assert!(sim.is_solved());
}

#[test]
fn undo_restores_state_and_empties_history() {
    let mut sim = CubeSimulation::new();
    assert!(sim.request_move(Face::U, true));
    run_to_idle(&mut sim);
    assert!(!sim.is_solved());

    assert!(sim.undo());
    assert_eq!(*sim.status(), EngineStatus::MoveUndone);
    run_to_idle(&mut sim);

    assert!(sim.is_solved());
    assert!(sim.user_history().is_empty());
    assert_eq!(sim.move_count(), 0);

    // Nothing left to undo.
    assert!(!sim.undo());
}

#[test]
fn scramble_then_solve_round_trips() {
    let mut sim = CubeSimulation::new();
    assert!(sim.scramble_with_params(ScrambleParams::with_seed(25, 42)));
    assert_eq!(*sim.status(), EngineStatus::Scrambling);
    assert_eq!(sim.scramble_history().len(), 25);
    run_to_idle(&mut sim);
    assert_eq!(*sim.status(), EngineStatus::ReadyToSolve);
    assert!(!sim.is_solved());

    assert!(sim.solve());
    assert_eq!(*sim.status(), EngineStatus::Solving);
    run_to_idle(&mut sim);

    assert!(sim.is_solved());
    assert_eq!(*sim.status(), EngineStatus::Solved);
    assert!(sim.scramble_history().is_empty());
    assert!(sim.user_history().is_empty());
}

#[test]
fn scramble_of_zero_is_immediately_ready() {
    let mut sim = CubeSimulation::new();
    assert!(sim.scramble_with_params(ScrambleParams::with_seed(0, 7)));
    assert!(!sim.busy());
    assert_eq!(*sim.status(), EngineStatus::ReadyToSolve);
    assert!(sim.is_solved());

    // Nothing recorded, so there is nothing to invert.
    assert!(!sim.solve());
    assert_eq!(*sim.status(), EngineStatus::NothingToSolve);
}

#[test]
fn user_moves_never_interleave_with_a_scramble() {
    let mut sim = CubeSimulation::new();
    assert!(sim.scramble_with_params(ScrambleParams::with_seed(10, 3)));
    let mut rejected = 0;
    while sim.busy() {
        if !sim.request_move(Face::R, true) {
            rejected += 1;
        }
        sim.step();
    }
    assert!(rejected > 0);
    assert!(sim.user_history().is_empty());

    // The scramble history alone still solves the cube.
    assert!(sim.solve());
    run_to_idle(&mut sim);
    assert!(sim.is_solved());
}

#[test]
fn reset_tears_down_a_running_sequence() {
    let mut sim = CubeSimulation::new();
    assert!(sim.scramble_with_params(ScrambleParams::with_seed(25, 9)));
    for _ in 0..5 {
        sim.step();
    }
    assert!(sim.busy());

    sim.reset();
    assert!(!sim.busy());
    assert!(sim.is_solved());
    assert_eq!(*sim.status(), EngineStatus::Reset);
    assert!(sim.scramble_history().is_empty());
    assert_eq!(sim.move_count(), 0);
    assert_eq!(sim.elapsed(), None);
}

#[test]
fn render_data_rotates_only_the_gripped_layer() {
    let mut sim = CubeSimulation::new();
    assert!(sim.request_move(Face::R, true));
    sim.step();
    assert!(sim.busy());

    let data = sim.render_data();
    let mut gripped = 0;
    for ((rendered_pos, rendered_rot), (_, c)) in data.iter().zip(sim.cube().iter()) {
        if Face::R.contains(c.position()) {
            gripped += 1;
            // Mid-flight, rendered transforms carry the group's partial
            // rotation; the layer's center sits on the axis, so only its
            // orientation shows it.
            assert!(!rotation_approx_eq(rendered_rot, &c.orientation()));
            if !approx_eq_vec(c.position(), Face::R.normal()) {
                assert!(!approx_eq_vec(*rendered_pos, c.position()));
            }
        } else {
            assert!(approx_eq_vec(*rendered_pos, c.position()));
            assert!(rotation_approx_eq(rendered_rot, &c.orientation()));
        }
    }
    assert_eq!(gripped, 9);

    // ...but the registry itself is untouched until commit.
    assert!(sim
        .cube()
        .iter()
        .all(|(_, c)| approx_eq_vec(c.position(), c.home())));
}

#[test]
fn status_callback_sees_busy_transitions() {
    let mut sim = CubeSimulation::new();
    let seen: Rc<RefCell<Vec<(EngineStatus, bool)>>> = Rc::default();
    let sink = Rc::clone(&seen);
    sim.set_status_callback(move |status, busy| sink.borrow_mut().push((status.clone(), busy)));

    assert!(sim.request_move(Face::B, false));
    run_to_idle(&mut sim);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], (EngineStatus::Rotating(sim.user_history()[0]), true));
    assert_eq!(seen[1], (EngineStatus::Ready, false));
}

#[test]
fn saved_state_survives_a_round_trip() {
    let mut sim = CubeSimulation::new();
    assert!(sim.scramble_with_params(ScrambleParams::with_seed(8, 21)));
    run_to_idle(&mut sim);
    let saved = sim.save_state();

    let mut other = CubeSimulation::new();
    other.restore_state(&saved).expect("snapshot from the same layout");
    assert_eq!(other.cube(), sim.cube());
    assert!(!other.busy());
}

#[test]
fn simulations_are_independent() {
    let mut a = CubeSimulation::new();
    let mut b = CubeSimulation::new();
    assert!(a.request_move(Face::L, true));
    run_to_idle(&mut a);
    assert!(!a.is_solved());
    assert!(b.is_solved());
    assert!(!b.busy());
}

#[test]
fn r_turn_shows_the_expected_sticker_colors() {
    let mut sim = CubeSimulation::new();
    assert!(sim.request_move(Face::R, true));
    run_to_idle(&mut sim);

    // The top-front-right corner rode the R layer to the back; its white
    // sticker (formerly up) now faces backwards.
    let carried = sim
        .cube()
        .at_position(vec3(1.0, 1.0, -1.0))
        .expect("layer stayed on the lattice");
    assert_eq!(carried.home(), vec3(1.0, 1.0, 1.0));
    assert_eq!(carried.sticker_facing(Face::B.normal()), Some(FaceColor::White));
    assert_eq!(carried.sticker_facing(Face::R.normal()), Some(FaceColor::Red));
    assert_eq!(carried.sticker_facing(Face::U.normal()), Some(FaceColor::Green));

    // R then R' restores solved exactly.
    assert!(sim.request_move(Face::R, false));
    run_to_idle(&mut sim);
    assert!(sim.is_solved());
}

#[test]
fn undo_mid_session_only_rewinds_user_moves() {
    let mut sim = CubeSimulation::new();
    assert!(sim.scramble_with_params(ScrambleParams::with_seed(5, 11)));
    run_to_idle(&mut sim);
    let scrambled = sim.cube().clone();

    assert!(sim.request_move(Face::F, true));
    run_to_idle(&mut sim);
    assert!(sim.request_move(Face::D, false));
    run_to_idle(&mut sim);
    assert_eq!(sim.move_count(), 2);

    assert!(sim.undo());
    run_to_idle(&mut sim);
    assert!(sim.undo());
    run_to_idle(&mut sim);

    assert_eq!(sim.move_count(), 0);
    assert_same_cube(sim.cube(), &scrambled);
    assert_eq!(sim.scramble_history().len(), 5);
}
