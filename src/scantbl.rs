use std::io::Read;

use crate::constants::{COLOR_COUNT, N_BGRS};
use crate::error::Error;

/// Pack an 8-bit (blue, green, red) camera sample into its 24-bit table index.
pub fn pack_bgr(bgr: [u8; 3]) -> usize {
    256 * (256 * bgr[0] as usize + bgr[1] as usize) + bgr[2] as usize
}

/// Per-color confidence scores for a raw BGR sample.
///
/// The matcher only consumes scores; `ScanTable` is the trained lookup
/// used in production, tests plug in synthetic scorers.
pub trait ColorScorer {
    /// Confidence that `bgr` shows each of the six colors, in U-R-F-D-L-B order.
    fn scores(&self, bgr: [u8; 3]) -> [u16; COLOR_COUNT];
}

/// Offline-trained lookup from every 24-bit BGR value to six per-color
/// confidence scores. Read-only once built; safe to share between
/// concurrent matcher runs.
pub struct ScanTable {
    rows: Box<[[u16; COLOR_COUNT]]>,
}

impl ScanTable {
    /// Wrap a fully populated table. Exactly 2^24 rows are expected.
    pub fn from_rows(rows: Vec<[u16; COLOR_COUNT]>) -> Result<Self, Error> {
        if rows.len() != N_BGRS {
            return Err(Error::InvalidScanTable("expected one row per 24-bit BGR value"));
        }
        Ok(Self {
            rows: rows.into_boxed_slice(),
        })
    }

    /// Read the trainer's binary dump: 2^24 rows of six little-endian
    /// u16 scores each, in packed-BGR order.
    pub fn read_from(mut reader: impl Read) -> Result<Self, Error> {
        // 4096 rows per read keeps the syscall count down.
        const CHUNK: usize = 4096;
        let mut rows = vec![[0u16; COLOR_COUNT]; N_BGRS];
        let mut buf = [0u8; 2 * COLOR_COUNT * CHUNK];

        for chunk in rows.chunks_mut(CHUNK) {
            let bytes = &mut buf[..2 * COLOR_COUNT * chunk.len()];
            reader
                .read_exact(bytes)
                .map_err(|_| Error::InvalidScanTable("truncated score data"))?;
            for (row, raw) in chunk.iter_mut().zip(bytes.chunks_exact(2 * COLOR_COUNT)) {
                for (col, b) in row.iter_mut().zip(raw.chunks_exact(2)) {
                    *col = u16::from_le_bytes([b[0], b[1]]);
                }
            }
        }

        Self::from_rows(rows)
    }

    /// The six per-color scores recorded for a sample.
    pub fn score(&self, bgr: [u8; 3]) -> [u16; COLOR_COUNT] {
        self.rows[pack_bgr(bgr)]
    }
}

impl ColorScorer for ScanTable {
    fn scores(&self, bgr: [u8; 3]) -> [u16; COLOR_COUNT] {
        self.score(bgr)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pack_bgr_is_blue_major() {
        assert_eq!(pack_bgr([0, 0, 0]), 0);
        assert_eq!(pack_bgr([0, 0, 255]), 255);
        assert_eq!(pack_bgr([1, 2, 3]), 65536 + 512 + 3);
        assert_eq!(pack_bgr([255, 255, 255]), N_BGRS - 1);
    }

    #[test]
    fn test_from_rows_rejects_wrong_shape() {
        assert!(matches!(
            ScanTable::from_rows(vec![[0; COLOR_COUNT]; 10]),
            Err(Error::InvalidScanTable(_))
        ));
    }
}
