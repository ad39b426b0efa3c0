//! The six turnable faces and the single table binding each face to an axis,
//! a layer, and a rotation sign.
//!
//! Every consumer of a face (direct moves, scramble, solve, undo) goes
//! through this table. The clockwise convention in particular must not be
//! re-derived anywhere else.

use std::ops::{Index, IndexMut};

use cgmath::{Rad, Vector3, vec3};
use strum::{Display, EnumString, VariantArray};

use crate::math::{FACE_SELECT_EPSILON, Float, QUARTER_TURN};

/// Lattice axis shared by a pair of opposite faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis (R and L faces).
    X,
    /// Y axis (U and D faces).
    Y,
    /// Z axis (F and B faces).
    Z,
}
impl Axis {
    /// Returns the positive unit vector along the axis.
    pub fn unit(self) -> Vector3<Float> {
        match self {
            Axis::X => vec3(1.0, 0.0, 0.0),
            Axis::Y => vec3(0.0, 1.0, 0.0),
            Axis::Z => vec3(0.0, 0.0, 1.0),
        }
    }

    /// Returns the component of `v` along the axis.
    pub fn component(self, v: Vector3<Float>) -> Float {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// One of the six turnable faces of the cube.
#[derive(
    Debug, Display, EnumString, VariantArray, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Face {
    /// Right (+X).
    R,
    /// Left (-X).
    L,
    /// Up (+Y).
    U,
    /// Down (-Y).
    D,
    /// Front (+Z).
    F,
    /// Back (-Z).
    B,
}

impl Face {
    /// Returns the rotation axis shared with the opposite face.
    pub fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Returns which layer of the axis this face selects: `+1.0` or `-1.0`.
    pub fn layer_sign(self) -> Float {
        match self {
            Face::R | Face::U | Face::F => 1.0,
            Face::L | Face::D | Face::B => -1.0,
        }
    }

    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> Vector3<Float> {
        self.axis().unit() * self.layer_sign()
    }

    /// Returns the face on the opposite side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::R => Face::L,
            Face::L => Face::R,
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// Returns the signed rotation angle about the *positive* axis for a
    /// clockwise quarter turn as seen from outside this face.
    ///
    /// For a right-handed coordinate system this is `-π/2` on positive-normal
    /// faces and `+π/2` on negative-normal faces; L and R rotate about the
    /// same X axis with opposite signs, and likewise for the other pairs.
    pub fn clockwise_angle(self) -> Rad<Float> {
        QUARTER_TURN * -self.layer_sign()
    }

    /// Returns whether a position lies in this face's layer.
    pub fn contains(self, position: Vector3<Float>) -> bool {
        (self.axis().component(position) - self.layer_sign()).abs() < FACE_SELECT_EPSILON
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Container with one value per [`Face`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceMap<T>(pub [T; 6]);
impl<T> FaceMap<T> {
    /// Constructs a map from a function on faces.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        FaceMap(std::array::from_fn(|i| f(Face::VARIANTS[i])))
    }

    /// Iterates over face/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::VARIANTS.iter().copied().zip(&self.0)
    }
}
impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face.index()]
    }
}
impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face.index()]
    }
}
