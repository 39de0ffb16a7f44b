use core::ops::Index;
use ndarray::Array2;

pub use board::*;
pub use controller::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod controller;
mod error;
mod generator;
pub mod render;
pub mod save;
mod tile;
mod types;

/// Side length used when none is given.
pub const DEFAULT_SIDE: Coord = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub side: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(side: Coord, mines: CellCount) -> Self {
        Self { side, mines }
    }

    /// Validates that the board is not empty and that at least one tile stays safe.
    pub fn new(side: Coord, mines: CellCount) -> Result<Self> {
        if side == 0 {
            return Err(GameError::InvalidSize);
        }
        let tiles = area(side);
        if mines >= tiles {
            return Err(GameError::TooManyMines { mines, tiles });
        }
        Ok(Self::new_unchecked(side, mines))
    }

    /// One mine for every eight tiles, rounded down.
    pub fn with_default_mines(side: Coord) -> Result<Self> {
        Self::new(side, Self::default_mines(side))
    }

    pub const fn default_mines(side: Coord) -> CellCount {
        area(side) / 8
    }

    pub const fn total_tiles(&self) -> CellCount {
        area(self.side)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIDE, Self::default_mines(DEFAULT_SIDE))
    }
}

/// Counts the mines of a `side × side` grid, rejecting grids with no safe tile left.
pub(crate) fn count_mines(mines: impl Iterator<Item = bool>, side: Coord) -> Result<CellCount> {
    let tiles = area(side);
    let mines = mines.filter(|&is_mine| is_mine).count();
    match CellCount::try_from(mines) {
        Ok(mines) if mines < tiles => Ok(mines),
        _ => Err(GameError::TooManyMines {
            mines: mines.try_into().unwrap_or(CellCount::MAX),
            tiles,
        }),
    }
}

/// Where the mines are, before any tile state exists.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// The mask must be square and leave at least one tile free of mines.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let side = match Coord::try_from(rows) {
            Ok(side) if rows == cols && side > 0 => side,
            _ => return Err(GameError::InvalidBoardShape),
        };
        let mine_count = count_mines(mine_mask.iter().copied(), side)?;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn from_mine_coords(side: Coord, mine_coords: &[Pos]) -> Result<Self> {
        if side == 0 {
            return Err(GameError::InvalidSize);
        }
        let mut mine_mask: Array2<bool> = Array2::default(cell((side, side)));

        for &pos in mine_coords {
            if pos.0 >= side || pos.1 >= side {
                return Err(GameError::OutOfBounds(pos.0, pos.1));
            }
            mine_mask[cell(pos)] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn side(&self) -> Coord {
        // shape was checked on construction
        self.mine_mask.nrows() as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.side(), self.mine_count)
    }

    pub fn contains_mine(&self, pos: Pos) -> bool {
        self[pos]
    }
}

impl Index<Pos> for MineLayout {
    type Output = bool;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.mine_mask[cell(pos)]
    }
}
