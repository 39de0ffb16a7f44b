//! Terminal layout of a board: 1-indexed row and column labels around the glyph grid.

use core::fmt::Write;

use crate::{Board, Coord};

/// Cosmetic transform applied to the glyph part of each rendered row.
///
/// Implementations must keep the visible characters as they are; they may only wrap them.
pub trait Decorator {
    fn decorate(&self, row: &str) -> String;
}

/// Leaves rows untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct Plain;

impl Decorator for Plain {
    fn decorate(&self, row: &str) -> String {
        row.to_string()
    }
}

fn label_width(side: Coord) -> usize {
    side.to_string().len()
}

/// Renders `board` with a header of column numbers and a row number before every row.
pub fn labeled(board: &Board, decorator: &dyn Decorator) -> String {
    let side = board.side();
    let width = label_width(side);
    let mut out = String::new();

    // header, padded to leave room for the row labels
    let _ = write!(out, "{:width$}", "");
    for col in 1..=side {
        let _ = write!(out, " {col:>width$}");
    }
    out.push('\n');

    for row in 0..side {
        let mut body = String::new();
        for col in 0..side {
            let glyph = board
                .glyph_at((row, col))
                .map(|glyph| glyph.as_char())
                .unwrap_or(' ');
            let _ = write!(body, " {glyph:>width$}");
        }
        let _ = writeln!(out, "{:>width$}{}", row + 1, decorator.decorate(&body));
    }
    out
}
