use crate::error::{CdResult, CubeDeckError};
use crate::facelet::{FACELET_COUNT, FACE_SIZE};
use crate::notation::{Algorithm, Axis, Face, Move, Turn};

/*
Facelet layout (Kociemba convention), 9 stickers per face in reading
order, faces concatenated U,R,F,D,L,B:

             U0 U1 U2
             U3 U4 U5
             U6 U7 U8
 L0 L1 L2    F0 F1 F2    R0 R1 R2    B0 B1 B2
 L3 L4 L5    F3 F4 F5    R3 R4 R5    B3 B4 B5
 L6 L7 L8    F6 F7 F8    R6 R7 R8    B6 B7 B8
             D0 D1 D2
             D3 D4 D5
             D6 D7 D8
*/

type FaceGrid = [char; FACE_SIZE];

fn rot_cw(f: FaceGrid) -> FaceGrid {
    [f[6], f[3], f[0], f[7], f[4], f[1], f[8], f[5], f[2]]
}

fn rot_ccw(f: FaceGrid) -> FaceGrid {
    [f[2], f[5], f[8], f[1], f[4], f[7], f[0], f[3], f[6]]
}

fn rot_180(f: FaceGrid) -> FaceGrid {
    [f[8], f[7], f[6], f[5], f[4], f[3], f[2], f[1], f[0]]
}

/// A facelet-level cube model: 6 faces of 9 sticker letters. The rest
/// of the crate only ever inspects it through its facelet-string
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceletCube {
    faces: [FaceGrid; 6],
}

impl Default for FaceletCube {
    fn default() -> Self {
        FaceletCube::solved()
    }
}

impl FaceletCube {
    pub fn solved() -> FaceletCube {
        let mut faces = [['U'; FACE_SIZE]; 6];
        for face in Face::ALL {
            faces[face.index()] = [face.letter(); FACE_SIZE];
        }
        FaceletCube { faces }
    }

    /// Build from a 54-char string. Letters must all be in {U,R,F,D,L,B};
    /// face counts are not enforced here.
    pub fn from_facelets(facelets: &str) -> CdResult<FaceletCube> {
        let chars: Vec<char> = facelets.chars().collect();
        if chars.len() != FACELET_COUNT {
            return Err(CubeDeckError::InputFormat(format!(
                "Facelet string must have length {}, got {}",
                FACELET_COUNT,
                chars.len()
            )));
        }
        let mut faces = [['U'; FACE_SIZE]; 6];
        for (i, &c) in chars.iter().enumerate() {
            if Face::from_letter(c).is_none() {
                return Err(CubeDeckError::InputFormat(format!(
                    "Bad facelet letter '{}' at index {}",
                    c, i
                )));
            }
            faces[i / FACE_SIZE][i % FACE_SIZE] = c;
        }
        Ok(FaceletCube { faces })
    }

    pub fn to_facelets(&self) -> String {
        self.faces.iter().flat_map(|f| f.iter()).collect()
    }

    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|f| f.iter().all(|&c| c == f[4]))
    }

    /// The six center letters in U,R,F,D,L,B face order.
    pub fn centers(&self) -> [char; 6] {
        let mut out = ['U'; 6];
        for (i, face) in self.faces.iter().enumerate() {
            out[i] = face[4];
        }
        out
    }

    pub fn apply(&mut self, alg: &Algorithm) {
        for &m in alg.moves() {
            self.apply_move(m);
        }
    }

    pub fn apply_move(&mut self, m: Move) {
        match m {
            Move::Rotation(Axis::X, t) => self.repeat(Self::rotate_x, t),
            Move::Rotation(Axis::Y, t) => self.repeat(Self::rotate_y, t),
            Move::Rotation(Axis::Z, t) => self.repeat(Self::rotate_z, t),
            Move::FaceTurn(Face::U, t) => self.repeat(Self::turn_u, t),
            // The other five face turns are U conjugated by a rotation
            // that brings the face to the top.
            Move::FaceTurn(Face::D, t) => self.conjugated_u(Self::rotate_x, 2, 2, t),
            Move::FaceTurn(Face::F, t) => self.conjugated_u(Self::rotate_x, 1, 3, t),
            Move::FaceTurn(Face::B, t) => self.conjugated_u(Self::rotate_x, 3, 1, t),
            Move::FaceTurn(Face::R, t) => self.conjugated_u(Self::rotate_z, 3, 1, t),
            Move::FaceTurn(Face::L, t) => self.conjugated_u(Self::rotate_z, 1, 3, t),
        }
    }

    fn repeat(&mut self, op: fn(&mut Self), t: Turn) {
        for _ in 0..t.quarter_turns() {
            op(self);
        }
    }

    fn conjugated_u(&mut self, rot: fn(&mut Self), before: usize, after: usize, t: Turn) {
        for _ in 0..before {
            rot(self);
        }
        self.repeat(Self::turn_u, t);
        for _ in 0..after {
            rot(self);
        }
    }

    /// Whole-cube x: like an R turn of the entire cube (F goes up).
    fn rotate_x(&mut self) {
        let [u, r, f, d, l, b] = self.faces;
        self.faces = [f, rot_cw(r), d, rot_180(b), rot_ccw(l), rot_180(u)];
    }

    /// Whole-cube y: like a U turn of the entire cube (R comes to front).
    fn rotate_y(&mut self) {
        let [u, r, f, d, l, b] = self.faces;
        self.faces = [rot_cw(u), b, r, rot_ccw(d), f, l];
    }

    /// Whole-cube z: like an F turn of the entire cube (U goes right).
    fn rotate_z(&mut self) {
        let [u, r, f, d, l, b] = self.faces;
        self.faces = [
            rot_cw(l),
            rot_cw(u),
            rot_cw(f),
            rot_cw(r),
            rot_cw(d),
            rot_ccw(b),
        ];
    }

    /// Clockwise U face turn: rotate U, cycle the top rows F->L->B->R->F.
    fn turn_u(&mut self) {
        let [u, r, f, d, l, b] = self.faces;
        let row = |src: FaceGrid, dst: FaceGrid| -> FaceGrid {
            [src[0], src[1], src[2], dst[3], dst[4], dst[5], dst[6], dst[7], dst[8]]
        };
        self.faces = [
            rot_cw(u),
            row(b, r),
            row(r, f),
            d,
            row(f, l),
            row(l, b),
        ];
    }
}
