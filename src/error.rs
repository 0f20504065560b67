use thiserror::Error;

/// Everything that can go wrong between raw samples and a facelet string.
#[derive(Error, Debug)]
pub enum Error {
    #[error("not a valid color")]
    InvalidColor,
    #[error("not a valid corner")]
    InvalidCorner,
    #[error("not a valid edge")]
    InvalidEdge,
    #[error("facelet strings need 54 characters over URFDLB")]
    InvalidFaceletString,
    #[error("facelets do not form a reachable cube")]
    InvalidFaceletValue,
    #[error("cubie state is not reachable")]
    InvalidCubieValue,
    #[error("scan table rejected: {0}")]
    InvalidScanTable(&'static str),
    #[error("scan cannot be matched to a solvable cube")]
    UnrecoverableScan,
}
