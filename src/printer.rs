use std::io::{self, Write};

use crossterm::style::{Color as TermColor, SetBackgroundColor};

use crate::facelet::{Color, FaceCube};

/// Terminal background for each sticker color, western scheme.
fn tile_color(color: Color) -> TermColor {
    match color {
        Color::U => TermColor::White,
        Color::R => TermColor::Red,
        Color::F => TermColor::Green,
        Color::D => TermColor::Yellow,
        Color::L => TermColor::DarkYellow,
        Color::B => TermColor::Blue,
    }
}

/// One three-sticker row of a face, as colored tiles.
fn face_row(out: &mut impl Write, fc: &FaceCube, face: usize, row: usize) -> io::Result<()> {
    for i in 0..3 {
        let sticker = fc.f[9 * face + 3 * row + i];
        write!(out, "{}  ", SetBackgroundColor(tile_color(sticker)))?;
    }
    write!(out, "{}", SetBackgroundColor(TermColor::Reset))
}

/// Print a matched scan as a colored cube net: U on top, the L-F-R-B
/// band in the middle, D at the bottom.
pub fn print_facelet(fc: &FaceCube) -> io::Result<()> {
    let mut out = io::stdout();
    let indent = " ".repeat(6);

    writeln!(out)?;
    for row in 0..3 {
        write!(out, "{indent}")?;
        face_row(&mut out, fc, 0, row)?;
        writeln!(out)?;
    }
    for row in 0..3 {
        for face in [4, 2, 1, 5] {
            face_row(&mut out, fc, face, row)?;
        }
        writeln!(out)?;
    }
    for row in 0..3 {
        write!(out, "{indent}")?;
        face_row(&mut out, fc, 3, row)?;
        writeln!(out)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;

    #[test]
    fn test_printer() {
        let state = Generator::random_cubie();
        let fc = FaceCube::from(&state);
        let _ = print_facelet(&fc);
    }
}
