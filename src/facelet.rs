use static_init::dynamic;
use std::fmt;

use self::{Color::*, Facelet::*};
use crate::constants::{ALL_COLORS, ALL_CORNERS, ALL_EDGES, N_FACELETS};
use crate::cubie::{Corner, CubieCube, Edge};
use crate::error::Error;

/// Names the colors of the cube facelets: up, right, front, down, left, back.
#[rustfmt::skip]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Eq, Hash)]
pub enum Color {
    U, R, F, D, L, B,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Color {
    type Error = Error;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match "URFDLB".find(value) {
            Some(i) => Ok(ALL_COLORS[i]),
            None => Err(Error::InvalidColor),
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_COLORS
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidColor)
    }
}

impl Color {
    /// Bit of this color inside a 6-bit color set.
    pub fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Cube on the facelet level: one color per sticker, faces in U-R-F-D-L-B
/// order, each face in reading order with its center at in-face index 4.
///
/// `Display` yields the 54-character facelet string; the solved cube is
/// `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FaceCube {
    pub f: [Color; N_FACELETS],
}

impl Default for FaceCube {
    fn default() -> Self {
        let mut f = [U; N_FACELETS];
        for (i, sticker) in f.iter_mut().enumerate() {
            *sticker = ALL_COLORS[i / 9];
        }
        Self { f }
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;
    fn try_from(cube_string: &str) -> Result<Self, Self::Error> {
        if cube_string.len() != N_FACELETS {
            return Err(Error::InvalidFaceletString);
        }

        let mut face = FaceCube::default();
        for (sticker, ch) in face.f.iter_mut().zip(cube_string.chars()) {
            *sticker = Color::try_from(ch)?;
        }
        Ok(face)
    }
}

/// Project a cubie state onto the stickers: every facelet looks up its
/// slot and reads the color the occupying piece shows at that position.
impl From<&CubieCube> for FaceCube {
    fn from(cc: &CubieCube) -> Self {
        let mut face = FaceCube::default();
        for (fl, sticker) in face.f.iter_mut().enumerate() {
            *sticker = match facelet_slot(fl) {
                FaceletSlot::Center(col) => col,
                FaceletSlot::Corner(slot, pos) => {
                    let s = slot as usize;
                    CORNER_COLOR[cc.cp[s] as usize][(pos as usize + cc.co[s] as usize) % 3]
                }
                FaceletSlot::Edge(slot, pos) => {
                    let s = slot as usize;
                    EDGE_COLOR[cc.ep[s] as usize][(pos as usize + cc.eo[s] as usize) % 2]
                }
            };
        }
        face
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sticker in &self.f {
            write!(f, "{sticker}")?;
        }
        Ok(())
    }
}

/// The 54 facelet positions, named 1..9 per face in reading order.
/// The face centers (`_U5` and friends) never take part in matching.
#[rustfmt::skip]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Facelet {
    U1, U2, U3, U4, _U5, U6, U7, U8, U9,
    R1, R2, R3, R4, _R5, R6, R7, R8, R9,
    F1, F2, F3, F4, _F5, F6, F7, F8, F9,
    D1, D2, D3, D4, _D5, D6, D7, D8, D9,
    L1, L2, L3, L4, _L5, L6, L7, L8, L9,
    B1, B2, B3, B4, _B5, B6, B7, B8, B9,
}

/// The three sticker positions of each corner slot, in the rotation
/// order the color triples use.
pub const CORNER_FACELET: [[Facelet; 3]; 8] = [
    [U9, R1, F3], // URF
    [U7, F1, L3], // UFL
    [U1, L1, B3], // ULB
    [U3, B1, R3], // UBR
    [D3, F9, R7], // DFR
    [D1, L9, F7], // DLF
    [D7, B9, L7], // DBL
    [D9, R9, B7], // DRB
];

/// The two sticker positions of each edge slot.
pub const EDGE_FACELET: [[Facelet; 2]; 12] = [
    [U6, R2], // UR
    [U8, F2], // UF
    [U4, L2], // UL
    [U2, B2], // UB
    [D6, R8], // DR
    [D2, F8], // DF
    [D4, L8], // DL
    [D8, B8], // DB
    [F6, R4], // FR
    [F4, L6], // FL
    [B6, L4], // BL
    [B4, R6], // BR
];

/// The colors on each corner piece, leading with its U or D sticker.
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [U, R, F],
    [U, F, L],
    [U, L, B],
    [U, B, R],
    [D, F, R],
    [D, L, F],
    [D, B, L],
    [D, R, B],
];

/// The colors on each edge piece.
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [U, R],
    [U, F],
    [U, L],
    [U, B],
    [D, R],
    [D, F],
    [D, L],
    [D, B],
    [F, R],
    [F, L],
    [B, L],
    [B, R],
];

/// The cubie slot a facelet sits on, together with the facelet's position
/// among the slot's 2 or 3 sticker positions.
///
/// Corner stickers sit on in-face indices {0, 2, 6, 8}, edge stickers on
/// {1, 3, 5, 7}; index 4 is the fixed center.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FaceletSlot {
    Center(Color),
    Corner(Corner, u8),
    Edge(Edge, u8),
}

struct FaceletMapTable {
    map: [FaceletSlot; N_FACELETS],
}

impl FaceletMapTable {
    fn new() -> Self {
        let mut map = [FaceletSlot::Center(U); N_FACELETS];
        for (face, color) in ALL_COLORS.iter().enumerate() {
            map[9 * face + 4] = FaceletSlot::Center(*color);
        }
        for (c, faces) in CORNER_FACELET.iter().enumerate() {
            for (j, fl) in faces.iter().enumerate() {
                map[*fl as usize] = FaceletSlot::Corner(ALL_CORNERS[c], j as u8);
            }
        }
        for (e, faces) in EDGE_FACELET.iter().enumerate() {
            for (j, fl) in faces.iter().enumerate() {
                map[*fl as usize] = FaceletSlot::Edge(ALL_EDGES[e], j as u8);
            }
        }
        Self { map }
    }
}

/// Facelet index -> (slot, position), inverted from CORNER_FACELET / EDGE_FACELET.
#[dynamic]
static FMAP: FaceletMapTable = FaceletMapTable::new();

/// The slot and sticker position a facelet index belongs to.
pub fn facelet_slot(facelet: usize) -> FaceletSlot {
    FMAP.map[facelet]
}
