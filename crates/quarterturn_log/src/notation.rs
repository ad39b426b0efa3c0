//! Functions for parsing and formatting move notation.
//!
//! A move is a face letter, optionally followed by `'` for counterclockwise:
//! `R U' F B' L D`.

use std::str::FromStr;

use itertools::Itertools;
use quarterturn_core::{Face, Move};

/// Formats a sequence of moves as a string.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().join(" ")
}

/// Parses a whitespace-separated sequence of moves.
pub fn parse_moves(s: &str) -> impl Iterator<Item = Result<Move, MoveParseError<'_>>> {
    s.split_whitespace().map(parse_move)
}

/// Parses a single move.
fn parse_move(s: &str) -> Result<Move, MoveParseError<'_>> {
    let (face_str, clockwise) = match s.strip_suffix('\'') {
        Some(rest) => (rest, false),
        None => (s, true),
    };
    let face = Face::from_str(face_str).map_err(|_| MoveParseError::BadMove(s))?;
    Ok(Move::new(face, clockwise))
}

/// Error encountered while parsing a move.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveParseError<'a> {
    #[error("bad move: {0:?}")]
    BadMove(&'a str),
}
