use rand::random;

use crate::constants::{COLOR_COUNT, N_FACELETS};
use crate::cubie::CubieCube;
use crate::facelet::FaceCube;
use crate::scantbl::ColorScorer;

/// Nominal camera BGR for each sticker color, western scheme:
/// U white, R red, F green, D yellow, L orange, B blue.
pub const NOMINAL_BGR: [[u8; 3]; COLOR_COUNT] = [
    [225, 225, 225],
    [45, 45, 205],
    [75, 160, 65],
    [50, 205, 215],
    [35, 120, 230],
    [170, 85, 35],
];

/// Random reachable cube states and synthetic camera samples for them.
pub struct Generator {}

impl Generator {
    /// A uniformly random reachable cube state.
    pub fn random_cubie() -> CubieCube {
        let mut cc = CubieCube::default();
        Self::shuffle(&mut cc.cp);
        Self::shuffle(&mut cc.ep);
        // A permutation parity mismatch is fixed by one extra edge swap.
        if cc.corner_parity() != cc.edge_parity() {
            cc.ep.swap(0, 1);
        }
        Self::fill_ori(&mut cc.co, 3);
        Self::fill_ori(&mut cc.eo, 2);
        cc
    }

    /// Perfect camera samples for a facelet state.
    pub fn facelet_bgrs(fc: &FaceCube) -> [[u8; 3]; N_FACELETS] {
        let mut bgrs = [[0; 3]; N_FACELETS];
        for (bgr, col) in bgrs.iter_mut().zip(fc.f.iter()) {
            *bgr = NOMINAL_BGR[*col as usize];
        }
        bgrs
    }

    /// Camera samples with up to `jitter` of noise on every channel.
    pub fn noisy_bgrs(fc: &FaceCube, jitter: u8) -> [[u8; 3]; N_FACELETS] {
        let mut bgrs = Self::facelet_bgrs(fc);
        for bgr in bgrs.iter_mut() {
            for ch in bgr.iter_mut() {
                let d = (random::<u8>() % (2 * jitter + 1)) as i16 - jitter as i16;
                *ch = (*ch as i16 + d).clamp(0, 255) as u8;
            }
        }
        bgrs
    }

    fn shuffle<T>(arr: &mut [T]) {
        for i in (1..arr.len()).rev() {
            arr.swap(i, random::<usize>() % (i + 1));
        }
    }

    fn fill_ori(oris: &mut [u8], m: u8) {
        let n = oris.len();
        let mut sum = 0;
        for o in oris[..n - 1].iter_mut() {
            *o = random::<u8>() % m;
            sum += *o;
        }
        oris[n - 1] = (m - sum % m) % m;
    }
}

/// Scores a sample by closeness to the nominal sticker colors. Stands in
/// for a trained scan table in tests and benchmarks.
pub struct NominalScorer {}

impl ColorScorer for NominalScorer {
    fn scores(&self, bgr: [u8; 3]) -> [u16; COLOR_COUNT] {
        let mut scores = [0; COLOR_COUNT];
        for (score, nominal) in scores.iter_mut().zip(NOMINAL_BGR.iter()) {
            let dist: u16 = bgr
                .iter()
                .zip(nominal.iter())
                .map(|(a, b)| (*a as i16 - *b as i16).unsigned_abs())
                .sum();
            *score = 800u16.saturating_sub(dist);
        }
        scores
    }
}
