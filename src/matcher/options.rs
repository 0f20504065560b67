use crate::facelet::Color;

/// One still-possible assignment of a piece and orientation to a slot:
/// the colors it would show at each sticker position, the mask of those
/// colors, and the (piece, orientation) pair itself.
#[derive(Debug, PartialEq, Clone, Copy)]
struct Candidate<const N_ORIS: usize> {
    cols: [Color; N_ORIS],
    colset: u8,
    ori: u8,
    piece: u8,
}

/// The candidates remaining for one cubie slot.
///
/// Starts with all `N_PIECES * N_ORIS` candidates and only ever shrinks.
/// Kept candidates live in the prefix `0..rem` of a fixed array so the
/// whole set stays plain `Copy` data and a snapshot is a struct assignment.
/// `N_OPTS` must equal `N_PIECES * N_ORIS`; stable const generics cannot
/// express the product in the array length.
///
/// Derived facts (forced color set, unanimous orientation, unanimous
/// piece) are recomputed only when a reducer strictly shrinks the set.
/// A unanimous orientation or piece stays latched for good.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct OptionSet<const N_PIECES: usize, const N_ORIS: usize, const N_OPTS: usize> {
    opts: [Candidate<N_ORIS>; N_OPTS],
    rem: usize,
    colset: u8,
    ori: i8,
    piece: i8,
}

impl<const N_PIECES: usize, const N_ORIS: usize, const N_OPTS: usize>
    OptionSet<N_PIECES, N_ORIS, N_OPTS>
{
    /// The unconstrained set for one slot of a group whose sticker colors
    /// are given by `piece_cols`. A piece sitting with orientation `ori`
    /// shows `piece_cols[piece][(j + ori) % N_ORIS]` at position `j`.
    pub fn new(piece_cols: &[[Color; N_ORIS]; N_PIECES]) -> Self {
        let mut opts = [Candidate {
            cols: [Color::U; N_ORIS],
            colset: 0,
            ori: 0,
            piece: 0,
        }; N_OPTS];

        let mut i = 0;
        for piece in 0..N_PIECES {
            for ori in 0..N_ORIS {
                let mut cols = [Color::U; N_ORIS];
                let mut colset = 0;
                for (j, col) in cols.iter_mut().enumerate() {
                    *col = piece_cols[piece][(j + ori) % N_ORIS];
                    colset |= col.bit();
                }
                opts[i] = Candidate {
                    cols,
                    colset,
                    ori: ori as u8,
                    piece: piece as u8,
                };
                i += 1;
            }
        }
        debug_assert_eq!(i, N_OPTS);

        Self {
            opts,
            rem: N_OPTS,
            colset: 0,
            ori: -1,
            piece: -1,
        }
    }

    /// Colors that every remaining candidate shows somewhere on the slot.
    pub fn forced_colset(&self) -> u8 {
        self.colset
    }

    /// The orientation shared by all remaining candidates, if unanimous.
    pub fn forced_ori(&self) -> Option<u8> {
        (self.ori >= 0).then_some(self.ori as u8)
    }

    /// The piece shared by all remaining candidates, if unanimous.
    pub fn forced_piece(&self) -> Option<u8> {
        (self.piece >= 0).then_some(self.piece as u8)
    }

    /// No candidate remains: the current branch is infeasible.
    pub fn is_empty(&self) -> bool {
        self.rem == 0
    }

    /// Number of remaining candidates.
    pub fn len(&self) -> usize {
        self.rem
    }

    /// Keep candidates showing `col` at sticker position `pos`.
    pub fn restrict_has_color_at(&mut self, pos: usize, col: Color) -> bool {
        self.retain(|c| c.cols[pos] == col)
    }

    /// Keep candidates that show `col` nowhere on the slot.
    pub fn restrict_excludes_color(&mut self, col: Color) -> bool {
        self.retain(|c| c.colset & col.bit() == 0)
    }

    /// Keep candidates with the given orientation.
    pub fn restrict_orientation(&mut self, ori: u8) -> bool {
        self.retain(|c| c.ori == ori)
    }

    /// Drop candidates for the given piece.
    pub fn restrict_not_piece(&mut self, piece: u8) -> bool {
        self.retain(|c| c.piece != piece)
    }

    fn retain(&mut self, keep: impl Fn(&Candidate<N_ORIS>) -> bool) -> bool {
        let mut kept = 0;
        for i in 0..self.rem {
            if keep(&self.opts[i]) {
                self.opts[kept] = self.opts[i];
                kept += 1;
            }
        }
        let reduced = kept != self.rem;
        self.rem = kept;
        if reduced {
            self.update();
        }
        reduced
    }

    fn update(&mut self) {
        if self.rem == 0 {
            return;
        }

        let mut colset = self.opts[0].colset;
        for i in 1..self.rem {
            colset &= self.opts[i].colset;
        }
        self.colset = colset;

        if self.ori == -1 {
            let first = self.opts[0].ori;
            if self.opts[1..self.rem].iter().all(|c| c.ori == first) {
                self.ori = first as i8;
            }
        }

        if self.piece == -1 {
            let first = self.opts[0].piece;
            if self.opts[1..self.rem].iter().all(|c| c.piece == first) {
                self.piece = first as i8;
            }
        }
    }
}
