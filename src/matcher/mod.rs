//! Matching scanned facelet colors to a solvable cube state.
//!
//! The matcher commits facelets in order of scan confidence. Every
//! commitment is checked by constraint propagation over the corner and
//! edge groups; a commitment that cannot be part of any solvable cube is
//! rolled back and the facelet is retried with its next best color.

/// Module for the per-group constraint propagation.
pub mod builder;
/// Module for the per-slot candidate sets.
pub mod options;

pub use builder::{CornersBuilder, CubieBuilder, EdgesBuilder};
pub use options::OptionSet;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::mem;

use crate::constants::{ALL_COLORS, COLOR_COUNT, N_FACELETS};
use crate::error::Error;
use crate::facelet::{facelet_slot, Color, FaceCube, FaceletSlot};
use crate::scantbl::ColorScorer;

/// Maps 54 raw BGR samples to the facelet colors of a solvable cube.
/// # Example
/// ```rust
/// use cubescan::facelet::FaceCube;
/// use cubescan::generator::{Generator, NominalScorer};
/// use cubescan::matcher::ColorMatcher;
///
/// fn main() {
///     let state = Generator::random_cubie();
///     let samples = Generator::noisy_bgrs(&FaceCube::from(&state), 10);
///     let matcher = ColorMatcher::new(&NominalScorer {});
///     let face_cube = matcher.match_colors(&samples).unwrap();
///     println!("{}", face_cube);
/// }
/// ```
pub struct ColorMatcher<'a, S: ColorScorer> {
    scorer: &'a S,
}

impl<'a, S: ColorScorer> ColorMatcher<'a, S> {
    pub fn new(scorer: &'a S) -> Self {
        Self { scorer }
    }

    /// Assign a color to every facelet such that the whole assignment is
    /// a reachable cube state.
    ///
    /// Facelets are committed best-confidence first; an assignment
    /// rejected by propagation falls back to the facelet's next best
    /// color. `Error::UnrecoverableScan` means some facelet ran out of
    /// colors to try, i.e. the samples cannot belong to a cube.
    pub fn match_colors(&self, bgrs: &[[u8; 3]; N_FACELETS]) -> Result<FaceCube, Error> {
        let mut conf = [[0i32; COLOR_COUNT]; N_FACELETS];
        for (row, bgr) in conf.iter_mut().zip(bgrs.iter()) {
            for (cell, score) in row.iter_mut().zip(self.scorer.scores(*bgr)) {
                *cell = score as i32;
            }
        }

        let mut facecube = [Color::U; N_FACELETS];
        // Highest confidence first; ties break on facelet index, then
        // color index, ascending.
        let mut heap = BinaryHeap::with_capacity(N_FACELETS);
        for f in 0..N_FACELETS {
            if f % 9 == 4 {
                facecube[f] = ALL_COLORS[f / 9]; // centers are fixed
            } else {
                let c = best_color(&conf[f]);
                heap.push((conf[f][c], Reverse(f), Reverse(c)));
                conf[f][c] = -1; // makes it easy to find the next best
            }
        }

        let mut corners = CornersBuilder::new();
        let mut edges = EdgesBuilder::new();
        // Scratch copies; a failed commitment swaps its snapshot back in.
        let mut corners1 = corners;
        let mut edges1 = edges;

        while let Some((_, Reverse(f), Reverse(c))) = heap.pop() {
            let col = ALL_COLORS[c];

            let succ = match facelet_slot(f) {
                FaceletSlot::Corner(slot, pos) => {
                    corners1 = corners;
                    corners.assign_color(slot as usize, pos as usize, col);
                    if !corners.propagate() {
                        mem::swap(&mut corners, &mut corners1);
                        false
                    } else {
                        match (corners.parity(), edges.parity()) {
                            (Some(par), None) => {
                                edges1 = edges;
                                edges.set_parity(par);
                                if !edges.propagate() {
                                    mem::swap(&mut corners, &mut corners1);
                                    mem::swap(&mut edges, &mut edges1);
                                    false
                                } else {
                                    true
                                }
                            }
                            _ => true,
                        }
                    }
                }
                FaceletSlot::Edge(slot, pos) => {
                    edges1 = edges;
                    edges.assign_color(slot as usize, pos as usize, col);
                    if !edges.propagate() {
                        mem::swap(&mut edges, &mut edges1);
                        false
                    } else {
                        match (edges.parity(), corners.parity()) {
                            (Some(par), None) => {
                                corners1 = corners;
                                corners.set_parity(par);
                                if !corners.propagate() {
                                    mem::swap(&mut edges, &mut edges1);
                                    mem::swap(&mut corners, &mut corners1);
                                    false
                                } else {
                                    true
                                }
                            }
                            _ => true,
                        }
                    }
                }
                FaceletSlot::Center(_) => continue,
            };

            if succ {
                facecube[f] = col;
            } else {
                let c = best_color(&conf[f]);
                if conf[f][c] == -1 {
                    return Err(Error::UnrecoverableScan);
                }
                heap.push((conf[f][c], Reverse(f), Reverse(c)));
                conf[f][c] = -1;
            }
        }

        Ok(FaceCube { f: facecube })
    }
}

fn best_color(row: &[i32; COLOR_COUNT]) -> usize {
    let mut best = 0;
    for c in 1..COLOR_COUNT {
        if row[c] > row[best] {
            best = c;
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::CubieCube;
    use crate::facelet::{CORNER_COLOR, EDGE_COLOR};
    use crate::generator::{Generator, NominalScorer};

    /// Scores keyed on the blue channel, giving a test full control of
    /// the 54x6 confidence matrix.
    struct RowScorer {
        rows: [[u16; COLOR_COUNT]; N_FACELETS],
    }

    impl ColorScorer for RowScorer {
        fn scores(&self, bgr: [u8; 3]) -> [u16; COLOR_COUNT] {
            self.rows[bgr[0] as usize]
        }
    }

    fn keyed_bgrs() -> [[u8; 3]; N_FACELETS] {
        let mut bgrs = [[0; 3]; N_FACELETS];
        for (f, bgr) in bgrs.iter_mut().enumerate() {
            bgr[0] = f as u8;
        }
        bgrs
    }

    fn rows_for(fc: &FaceCube) -> [[u16; COLOR_COUNT]; N_FACELETS] {
        let mut rows = [[10; COLOR_COUNT]; N_FACELETS];
        for (row, col) in rows.iter_mut().zip(fc.f.iter()) {
            row[*col as usize] = 100;
        }
        rows
    }

    #[test]
    fn test_identity_cube() {
        let scorer = NominalScorer {};
        let bgrs = Generator::facelet_bgrs(&FaceCube::default());
        let fc = ColorMatcher::new(&scorer).match_colors(&bgrs).unwrap();
        assert_eq!(
            fc.to_string(),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }

    #[test]
    fn test_round_trip_random_states() {
        let scorer = NominalScorer {};
        let matcher = ColorMatcher::new(&scorer);
        for _ in 0..10 {
            let state = Generator::random_cubie();
            let expected = FaceCube::from(&state);
            let bgrs = Generator::facelet_bgrs(&expected);
            let fc = matcher.match_colors(&bgrs).unwrap();
            assert_eq!(fc, expected);
            // The output always describes a reachable state.
            assert!(CubieCube::try_from(&fc).unwrap().verify().is_ok());
        }
    }

    #[test]
    fn test_round_trip_with_noise() {
        let scorer = NominalScorer {};
        let matcher = ColorMatcher::new(&scorer);
        for _ in 0..10 {
            let state = Generator::random_cubie();
            let expected = FaceCube::from(&state);
            let bgrs = Generator::noisy_bgrs(&expected, 12);
            let fc = matcher.match_colors(&bgrs).unwrap();
            assert_eq!(fc, expected);
        }
    }

    #[test]
    fn test_determinism() {
        let scorer = NominalScorer {};
        let matcher = ColorMatcher::new(&scorer);
        let state = Generator::random_cubie();
        let bgrs = Generator::noisy_bgrs(&FaceCube::from(&state), 25);
        let first = matcher.match_colors(&bgrs);
        let second = matcher.match_colors(&bgrs);
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(Error::UnrecoverableScan), Err(Error::UnrecoverableScan)) => {}
            (a, b) => panic!("diverging outcomes: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn test_swapped_confidence_on_edge_is_corrected() {
        // Facelet 1 sits on the UB edge; its top two confidences are
        // swapped so B narrowly beats the true U. Every other facelet
        // commits first, pinning the UB slot, so the wrong color fails
        // on contact and the second guess wins.
        let solved = FaceCube::default();
        let mut rows = rows_for(&solved);
        rows[1] = [90, 10, 10, 10, 10, 95];
        let scorer = RowScorer { rows };
        let fc = ColorMatcher::new(&scorer)
            .match_colors(&keyed_bgrs())
            .unwrap();
        assert_eq!(fc, solved);
    }

    #[test]
    fn test_conflicting_corner_recovers_with_second_best() {
        // Facelet 8 is the U sticker of URF. Its neighbors commit first
        // and pin the slot, so the bogus F guess is rejected and the
        // runner-up U completes the scan.
        let solved = FaceCube::default();
        let mut rows = rows_for(&solved);
        rows[8] = [90, 10, 95, 10, 10, 10];
        let scorer = RowScorer { rows };
        let fc = ColorMatcher::new(&scorer)
            .match_colors(&keyed_bgrs())
            .unwrap();
        assert_eq!(fc, solved);
    }

    #[test]
    fn test_unrecoverable_scan() {
        // Here the bogus B on facelet 1 outranks everything and commits
        // immediately. No edge assignment can complete a cube around it,
        // and the facelets taking the blame run out of colors.
        let mut rows = rows_for(&FaceCube::default());
        rows[1] = [90, 10, 10, 10, 10, 105];
        let scorer = RowScorer { rows };
        let res = ColorMatcher::new(&scorer).match_colors(&keyed_bgrs());
        assert!(matches!(res, Err(Error::UnrecoverableScan)));
    }

    #[test]
    fn test_parity_handoff_resolves_last_two_edges() {
        // Corners of a cube with URF and UFL exchanged: an odd
        // permutation, so the corner parity comes out 1.
        let mut corners = CornersBuilder::new();
        let perm = [1, 0, 2, 3, 4, 5, 6, 7];
        for (slot, piece) in perm.iter().enumerate() {
            for j in 0..3 {
                corners.assign_color(slot, j, CORNER_COLOR[*piece][j]);
            }
        }
        assert!(corners.propagate());
        assert_eq!(corners.parity(), Some(1));

        // Ten edges in place leave BL and BR open with no sticker data.
        let mut edges = EdgesBuilder::new();
        for slot in 0..10 {
            for j in 0..2 {
                edges.assign_color(slot, j, EDGE_COLOR[slot][j]);
            }
        }
        assert!(edges.propagate());
        assert_eq!(edges.parity(), None);
        assert_eq!(edges.piece_at(10), None);

        // Handing over the corner parity closes the permutation: the
        // identity placement would be even, so BL and BR swap.
        edges.set_parity(corners.parity().unwrap());
        assert!(edges.propagate());
        assert_eq!(edges.parity(), Some(1));
        assert_eq!(edges.piece_at(10), Some(11));
        assert_eq!(edges.piece_at(11), Some(10));
    }
}
