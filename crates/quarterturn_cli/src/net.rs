//! Text rendering of the cube as an unfolded net.

use cgmath::{Vector3, vec3};
use quarterturn_core::{CubeState, Face, Float};

/// Returns the lattice coordinate shown at (row, col) of a face's 3x3 grid,
/// with the net unfolded so that adjacent faces share their touching edge.
fn cell_position(face: Face, row: usize, col: usize) -> Vector3<Float> {
    let r = row as Float - 1.0;
    let c = col as Float - 1.0;
    match face {
        Face::U => vec3(c, 1.0, r),
        Face::L => vec3(-1.0, -r, c),
        Face::F => vec3(c, -r, 1.0),
        Face::R => vec3(1.0, -r, -c),
        Face::B => vec3(-c, -r, -1.0),
        Face::D => vec3(c, -1.0, -r),
    }
}

fn face_row(cube: &CubeState, face: Face, row: usize) -> String {
    let mut out = String::new();
    for col in 0..3 {
        if col > 0 {
            out.push(' ');
        }
        let letter = cube
            .at_position(cell_position(face, row, col))
            .and_then(|c| c.sticker_facing(face.normal()))
            .map_or('?', |color| color.letter());
        out.push(letter);
    }
    out
}

/// Renders the six sticker grids as a standard cross-shaped net:
/// U on top, then L F R B, then D.
pub(crate) fn render_net(cube: &CubeState) -> String {
    let pad = "      ";
    let mut out = String::new();
    for row in 0..3 {
        out.push_str(pad);
        out.push_str(&face_row(cube, Face::U, row));
        out.push('\n');
    }
    for row in 0..3 {
        let middle = [Face::L, Face::F, Face::R, Face::B]
            .map(|face| face_row(cube, face, row))
            .join(" ");
        out.push_str(&middle);
        out.push('\n');
    }
    for row in 0..3 {
        out.push_str(pad);
        out.push_str(&face_row(cube, Face::D, row));
        out.push('\n');
    }
    out
}
