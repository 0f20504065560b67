use crate::cubie::{Corner, Corner::*, Edge, Edge::*};
use crate::facelet::Color;

/// number of colors / faces
pub const COLOR_COUNT: usize = 6;
/// number of facelets on a 3x3 cube
pub const N_FACELETS: usize = 54;
/// number of corner slots
pub const N_CORNERS: usize = 8;
/// number of edge slots
pub const N_EDGES: usize = 12;
/// 3 possible twists of a corner cubie
pub const CORNER_TWISTS: usize = 3;
/// 2 possible flips of an edge cubie
pub const EDGE_FLIPS: usize = 2;
/// 8 corners x 3 twists candidate assignments per corner slot
pub const N_CORNER_OPTS: usize = N_CORNERS * CORNER_TWISTS;
/// 12 edges x 2 flips candidate assignments per edge slot
pub const N_EDGE_OPTS: usize = N_EDGES * EDGE_FLIPS;
/// each color covers 4 corner stickers and 4 edge stickers
pub const STICKERS_PER_COLOR: i8 = 4;
/// 2^24 packed BGR values
pub const N_BGRS: usize = 1 << 24;

pub const ALL_COLORS: [Color; COLOR_COUNT] =
    [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

pub const ALL_CORNERS: [Corner; N_CORNERS] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];

pub const ALL_EDGES: [Edge; N_EDGES] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];
