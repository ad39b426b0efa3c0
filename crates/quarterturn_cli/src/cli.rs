//! Command-line subcommands.

use std::path::PathBuf;

use eyre::{Context, Result, eyre};
use quarterturn_core::{CubeState, Move, ScrambleParams};
use quarterturn_engine::CubeSimulation;
use quarterturn_log::{SavedCube, notation};

use crate::net::render_net;

/// Quarterturn command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Scramble a solved cube and print the scramble and the net.
    Scramble {
        /// Number of quarter turns.
        #[arg(short, long)]
        length: Option<u32>,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence (e.g. "R U' F") to a solved cube and print the
    /// net.
    Apply {
        /// Whitespace-separated moves; `'` marks counterclockwise.
        moves: String,
    },
    /// Scramble, then solve by inverse replay, printing status transitions.
    Demo {
        /// Number of quarter turns.
        #[arg(short, long)]
        length: Option<u32>,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence and save the resulting state as JSON.
    Save {
        /// Output file.
        file: PathBuf,
        /// Whitespace-separated moves to apply first.
        #[arg(short, long)]
        moves: Option<String>,
    },
    /// Load a saved state and print the net.
    Load {
        /// Input file.
        file: PathBuf,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Scramble { length, seed } => {
            let mut sim = CubeSimulation::new();
            sim.scramble_with_params(params(&sim, length, seed));
            run_to_idle(&mut sim)?;
            println!(
                "Scramble: {}",
                notation::format_moves(sim.scramble_history().iter().copied()),
            );
            print!("{}", render_net(sim.cube()));
            Ok(())
        }

        Subcommand::Apply { moves } => {
            let cube = cube_with_moves(&moves)?;
            print!("{}", render_net(&cube));
            Ok(())
        }

        Subcommand::Demo { length, seed } => {
            let mut sim = CubeSimulation::new();
            sim.set_status_callback(|status, busy| {
                let gate = if busy { "busy" } else { "idle" };
                println!("[{gate}] {status}");
            });

            sim.scramble_with_params(params(&sim, length, seed));
            run_to_idle(&mut sim)?;
            println!(
                "Scramble: {}",
                notation::format_moves(sim.scramble_history().iter().copied()),
            );

            sim.solve();
            run_to_idle(&mut sim)?;
            if !sim.is_solved() {
                return Err(eyre!("cube did not return to solved"));
            }
            print!("{}", render_net(sim.cube()));
            Ok(())
        }

        Subcommand::Save { file, moves } => {
            let cube = cube_with_moves(moves.as_deref().unwrap_or(""))?;
            let json = SavedCube::from_state(&cube).to_json()?;
            std::fs::write(&file, json)
                .wrap_err_with(|| format!("writing {}", file.display()))?;
            Ok(())
        }

        Subcommand::Load { file } => {
            let json = std::fs::read_to_string(&file)
                .wrap_err_with(|| format!("reading {}", file.display()))?;
            let saved = SavedCube::from_json(&json)?;
            let mut sim = CubeSimulation::new();
            sim.restore_state(&saved)?;
            print!("{}", render_net(sim.cube()));
            Ok(())
        }
    }
}

fn params(sim: &CubeSimulation, length: Option<u32>, seed: Option<u64>) -> ScrambleParams {
    let length = length.unwrap_or(sim.prefs().scramble_length);
    match seed {
        Some(seed) => ScrambleParams::with_seed(length, seed),
        None => ScrambleParams::new(length),
    }
}

fn cube_with_moves(moves: &str) -> Result<CubeState> {
    let moves: Vec<Move> = notation::parse_moves(moves)
        .collect::<Result<_, _>>()
        .map_err(|e| eyre!("{e}"))?;
    let mut cube = CubeState::new_solved();
    for mv in moves {
        cube.apply_move(mv);
    }
    Ok(cube)
}

/// Drives the frame loop until the engine goes idle.
fn run_to_idle(sim: &mut CubeSimulation) -> Result<()> {
    for _ in 0..1_000_000 {
        if !sim.busy() {
            return Ok(());
        }
        sim.step();
    }
    Err(eyre!("rotation never completed"))
}
