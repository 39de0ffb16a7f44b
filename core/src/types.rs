/// Single coordinate axis, used for the board side and for positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Board position `(row, col)`, 0-indexed.
pub type Pos = (Coord, Coord);

/// Number of tiles on a square board.
pub const fn area(side: Coord) -> CellCount {
    let side = side as CellCount;
    side * side
}

/// Array index of a position, grids are stored row-major.
pub(crate) fn cell((row, col): Pos) -> (usize, usize) {
    (row.into(), col.into())
}

/// The up-to-8 positions touching `pos` on a `side × side` board, never `pos` itself.
pub fn neighbors((row, col): Pos, side: Coord) -> impl Iterator<Item = Pos> {
    let step = move |value: Coord, delta: i8| {
        value
            .checked_add_signed(delta)
            .filter(|&next| next < side)
    };
    (-1i8..=1)
        .flat_map(|d_row| (-1i8..=1).map(move |d_col| (d_row, d_col)))
        .filter(|&delta| delta != (0, 0))
        .filter_map(move |(d_row, d_col)| Some((step(row, d_row)?, step(col, d_col)?)))
}
