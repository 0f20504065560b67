use std::fmt;

use crate::constants::{ALL_COLORS, ALL_CORNERS, ALL_EDGES, N_CORNERS, N_EDGES};
use crate::error::Error;
use crate::facelet::{Color, FaceCube, CORNER_COLOR, CORNER_FACELET, EDGE_COLOR, EDGE_FACELET};

/// Represents the 8 corners on the cube, described by the layer they are on.
///
/// Example: `ULB` (Up, Left, Bottom).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<u8> for Corner {
    type Error = Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_CORNERS
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidCorner)
    }
}

/// Represents the 12 edges on the cube, described by the layer they are on.
///
/// Example: `BL` (Bottom, Left).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Eq, Hash)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<u8> for Edge {
    type Error = Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_EDGES
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidEdge)
    }
}

/// Cube on the cubie level, with centers fixed at their canonical faces.
///
/// Orientations follow the sticker formula used throughout the matcher:
/// the piece occupying a slot shows `cols[piece][(pos + ori) % n]` at
/// sticker position `pos`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CubieCube {
    /// Which corner piece occupies each corner slot.
    pub cp: [Corner; N_CORNERS],
    /// Corner orientations, 0..=2.
    pub co: [u8; N_CORNERS],
    /// Which edge piece occupies each edge slot.
    pub ep: [Edge; N_EDGES],
    /// Edge orientations, 0..=1.
    pub eo: [u8; N_EDGES],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self {
            cp: ALL_CORNERS,
            co: [0; N_CORNERS],
            ep: ALL_EDGES,
            eo: [0; N_EDGES],
        }
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let corners: Vec<String> = self
            .cp
            .iter()
            .zip(self.co)
            .map(|(c, o)| format!("{c}{o}"))
            .collect();
        let edges: Vec<String> = self
            .ep
            .iter()
            .zip(self.eo)
            .map(|(e, o)| format!("{e}{o}"))
            .collect();
        write!(f, "{} | {}", corners.join(" "), edges.join(" "))
    }
}

/// The (piece, orientation) whose induced sticker colors are exactly
/// `seen`, if any.
fn identify<const N: usize>(seen: [Color; N], piece_cols: &[[Color; N]]) -> Option<(usize, u8)> {
    for (piece, cols) in piece_cols.iter().enumerate() {
        for ori in 0..N {
            if (0..N).all(|pos| seen[pos] == cols[(pos + ori) % N]) {
                return Some((piece, ori as u8));
            }
        }
    }
    None
}

/// Read the cubie state off a facelet cube.
impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;
    fn try_from(face_cube: &FaceCube) -> Result<Self, Self::Error> {
        for (face, col) in ALL_COLORS.iter().enumerate() {
            if face_cube.f[9 * face + 4] != *col {
                return Err(Error::InvalidFaceletValue);
            }
        }

        let mut cc = CubieCube::default();
        for (slot, &stickers) in CORNER_FACELET.iter().enumerate() {
            let seen = stickers.map(|fl| face_cube.f[fl as usize]);
            let (piece, ori) = identify(seen, &CORNER_COLOR).ok_or(Error::InvalidFaceletValue)?;
            cc.cp[slot] = ALL_CORNERS[piece];
            cc.co[slot] = ori;
        }
        for (slot, &stickers) in EDGE_FACELET.iter().enumerate() {
            let seen = stickers.map(|fl| face_cube.f[fl as usize]);
            let (piece, ori) = identify(seen, &EDGE_COLOR).ok_or(Error::InvalidFaceletValue)?;
            cc.ep[slot] = ALL_EDGES[piece];
            cc.eo[slot] = ori;
        }

        cc.verify()?;
        Ok(cc)
    }
}

/// Parity of a permutation over piece ids: its inversion count mod 2.
fn permutation_parity(perm: &[u8]) -> u8 {
    let mut inversions = 0;
    for (i, &a) in perm.iter().enumerate() {
        inversions += perm[i + 1..].iter().filter(|&&b| b < a).count();
    }
    (inversions % 2) as u8
}

impl CubieCube {
    /// Parity of the corner permutation.
    pub fn corner_parity(&self) -> u8 {
        permutation_parity(&self.cp.map(|c| c as u8))
    }

    /// Parity of the edge permutation. Both parities agree on any
    /// reachable cube.
    pub fn edge_parity(&self) -> u8 {
        permutation_parity(&self.ep.map(|e| e as u8))
    }

    /// Check that this state is reachable: every piece placed exactly
    /// once, twists summing to 0 mod 3, flips summing to 0 mod 2, and
    /// equal permutation parities.
    pub fn verify(&self) -> Result<(), Error> {
        let mut placed = 0u16;
        for c in self.cp {
            placed |= 1 << c as usize;
        }
        let twist: u32 = self.co.iter().map(|&o| o as u32).sum();
        if placed != (1 << N_CORNERS) - 1 || self.co.iter().any(|&o| o > 2) || twist % 3 != 0 {
            return Err(Error::InvalidCorner);
        }

        let mut placed = 0u16;
        for e in self.ep {
            placed |= 1 << e as usize;
        }
        let flip: u32 = self.eo.iter().map(|&o| o as u32).sum();
        if placed != (1 << N_EDGES) - 1 || self.eo.iter().any(|&o| o > 1) || flip % 2 != 0 {
            return Err(Error::InvalidEdge);
        }

        if self.corner_parity() != self.edge_parity() {
            return Err(Error::InvalidCubieValue);
        }
        Ok(())
    }

    /// Whether `verify` passes.
    pub fn is_solvable(&self) -> bool {
        self.verify().is_ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::{Corner::*, Edge::*};

    #[test]
    fn test_read_cubies_off_facelets() {
        let faces = "DRBLUURLDRBLRRBFLFFUBFFDRUDURRBDFBBULDUDLUDLBUFFDBFLRL";
        let face_cube = FaceCube::try_from(faces).unwrap();
        let state = CubieCube::try_from(&face_cube).unwrap();

        assert_eq!(
            state,
            CubieCube {
                cp: [DRB, URF, DLF, ULB, DFR, UBR, DBL, UFL],
                co: [0, 1, 0, 2, 2, 0, 1, 0],
                ep: [UB, UL, DL, FR, FL, UR, BL, BR, DR, UF, DF, DB],
                eo: [0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0],
            }
        );
        // Projection is the exact inverse of identification.
        assert_eq!(FaceCube::from(&state), face_cube);
    }

    #[test]
    fn test_rejects_moved_centers() {
        let faces = "DRBLFURLDRBLRRBFLFFUBFUDRUDURRBDFBBULDUDLUDLBUFFDBFLRL";
        let face_cube = FaceCube::try_from(faces).unwrap();
        assert!(matches!(
            CubieCube::try_from(&face_cube),
            Err(Error::InvalidFaceletValue)
        ));
    }

    #[test]
    fn test_verify_rejects_single_twist() {
        let mut cc = CubieCube::default();
        cc.co[0] = 1;
        assert!(matches!(cc.verify(), Err(Error::InvalidCorner)));
        assert!(!cc.is_solvable());
    }

    #[test]
    fn test_verify_rejects_single_flip() {
        let mut cc = CubieCube::default();
        cc.eo[3] = 1;
        assert!(matches!(cc.verify(), Err(Error::InvalidEdge)));
    }

    #[test]
    fn test_verify_rejects_lone_swap() {
        // Swapping two corners without touching the edges breaks parity.
        let mut cc = CubieCube::default();
        cc.cp.swap(0, 1);
        assert!(matches!(cc.verify(), Err(Error::InvalidCubieValue)));

        // A matching edge swap restores it.
        cc.ep.swap(4, 7);
        assert!(cc.verify().is_ok());
    }

    #[test]
    fn test_parity_counts_inversions() {
        let cc = CubieCube::default();
        assert_eq!(cc.corner_parity(), 0);
        assert_eq!(cc.edge_parity(), 0);

        let mut cc = CubieCube::default();
        cc.cp.swap(2, 5);
        assert_eq!(cc.corner_parity(), 1);
    }
}
