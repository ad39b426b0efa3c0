//! Individual unit cubes and their stickers.

use cgmath::{InnerSpace, One, Quaternion, Rotation, Vector3};
use strum::Display;

use crate::face::{Face, FaceMap};
use crate::math::{self, Float};

/// Index of a cubelet within a [`crate::CubeState`], stable across the life
/// of the cube and equal to its creation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeletId(pub u8);

/// Sticker color, named for the face it belongs to on a solved cube.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceColor {
    /// Right face color.
    Red,
    /// Left face color.
    Orange,
    /// Up face color.
    White,
    /// Down face color.
    Yellow,
    /// Front face color.
    Green,
    /// Back face color.
    Blue,
}
impl FaceColor {
    /// Returns the color assigned to a face on a solved cube.
    pub fn of_face(face: Face) -> FaceColor {
        match face {
            Face::R => FaceColor::Red,
            Face::L => FaceColor::Orange,
            Face::U => FaceColor::White,
            Face::D => FaceColor::Yellow,
            Face::F => FaceColor::Green,
            Face::B => FaceColor::Blue,
        }
    }

    /// Returns a single-letter abbreviation for text displays.
    pub fn letter(self) -> char {
        match self {
            FaceColor::Red => 'R',
            FaceColor::Orange => 'O',
            FaceColor::White => 'W',
            FaceColor::Yellow => 'Y',
            FaceColor::Green => 'G',
            FaceColor::Blue => 'B',
        }
    }
}

/// One of the 26 visible unit cubes.
///
/// The stickers are fixed at creation from the home position and never
/// change; only `position` and `orientation` move, which is what makes
/// solved/unsolved state observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubelet {
    home: Vector3<Float>,
    position: Vector3<Float>,
    orientation: Quaternion<Float>,
    stickers: FaceMap<Option<FaceColor>>,
}

impl Cubelet {
    pub(crate) fn new(home: Vector3<Float>) -> Self {
        let stickers = FaceMap::from_fn(|face| {
            face.contains(home).then(|| FaceColor::of_face(face))
        });
        Cubelet {
            home,
            position: home,
            orientation: Quaternion::one(),
            stickers,
        }
    }

    /// Returns the lattice coordinate this cubelet occupies on a solved cube.
    pub fn home(&self) -> Vector3<Float> {
        self.home
    }
    /// Returns the lattice coordinate this cubelet currently occupies.
    pub fn position(&self) -> Vector3<Float> {
        self.position
    }
    /// Returns the rotation accumulated across every move ever applied to
    /// this cubelet.
    pub fn orientation(&self) -> Quaternion<Float> {
        self.orientation
    }

    pub(crate) fn set_position(&mut self, position: Vector3<Float>) {
        self.position = position;
    }
    pub(crate) fn set_orientation(&mut self, orientation: Quaternion<Float>) {
        self.orientation = orientation;
    }

    /// Returns the sticker on the side that touches `face` when the cubelet
    /// is at home, or `None` for an interior side.
    pub fn sticker(&self, face: Face) -> Option<FaceColor> {
        self.stickers[face]
    }

    /// Returns the sticker currently facing `world_direction`, accounting for
    /// the accumulated orientation.
    pub fn sticker_facing(&self, world_direction: Vector3<Float>) -> Option<FaceColor> {
        self.stickers
            .iter()
            .filter_map(|(face, &color)| Some((face, color?)))
            .find(|&(face, _)| {
                let rotated = self.orientation.rotate_vector(face.normal());
                rotated.dot(world_direction) > 1.0 - math::FACE_SELECT_EPSILON
            })
            .map(|(_, color)| color)
    }

    /// Returns whether the cubelet sits at its home coordinate with an
    /// identity orientation.
    pub fn is_home(&self) -> bool {
        math::approx_eq_vec(self.position, self.home)
            && math::is_identity_rotation(&self.orientation)
    }
}
