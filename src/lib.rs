//! # CubeScan
//! `CubeScan` - color matching core for a rubiks cube scanner: turns 54
//! raw BGR samples into the facelet string of a solvable cube state.

pub mod error;
/// Module containing 3x3 cube constants.
pub mod constants;
/// Module for represent a cube on the facelet level.
pub mod facelet;
/// Module for represent a cube on the cubie level.
pub mod cubie;
/// Module for the BGR confidence score lookup.
pub mod scantbl;
/// Module for the confidence driven color matcher.
pub mod matcher;
/// Module for generating random cube states and synthetic samples.
pub mod generator;
#[cfg(feature = "term")]
/// Module for print a facelet cube on terminal with color.
pub mod printer;

use error::Error;
use facelet::FaceCube;
use matcher::ColorMatcher;
use scantbl::ColorScorer;

/// Match 54 scanned BGR samples against a scorer in one call.
pub fn match_colors<S: ColorScorer>(
    scorer: &S,
    bgrs: &[[u8; 3]; constants::N_FACELETS],
) -> Result<FaceCube, Error> {
    ColorMatcher::new(scorer).match_colors(bgrs)
}
