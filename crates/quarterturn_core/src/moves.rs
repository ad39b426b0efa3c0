//! Quarter-turn moves.

use std::fmt;

use cgmath::Rad;

use crate::face::Face;
use crate::math::Float;

/// A quarter turn of one face: fully described by the face and a direction,
/// and reversible by flipping the direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// Whether the turn is clockwise as seen from outside the face.
    pub clockwise: bool,
}

impl Move {
    /// Constructs a move.
    pub fn new(face: Face, clockwise: bool) -> Self {
        Move { face, clockwise }
    }

    /// Returns the inverse move.
    #[must_use]
    pub fn rev(self) -> Move {
        Move {
            face: self.face,
            clockwise: !self.clockwise,
        }
    }

    /// Returns the signed rotation angle about the face's positive axis.
    pub fn angle(self) -> Rad<Float> {
        let clockwise = self.face.clockwise_angle();
        if self.clockwise { clockwise } else { -clockwise }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.clockwise { "" } else { "'" };
        write!(f, "{}{suffix}", self.face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rev_flips_direction_only() {
        let mv = Move::new(Face::F, true);
        assert_eq!(mv.rev(), Move::new(Face::F, false));
        assert_eq!(mv.rev().rev(), mv);
        assert_eq!(mv.angle(), -mv.rev().angle());
    }

    #[test]
    fn display_uses_prime_for_counterclockwise() {
        assert_eq!(Move::new(Face::R, true).to_string(), "R");
        assert_eq!(Move::new(Face::U, false).to_string(), "U'");
    }
}
