use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

/// Result of uncovering a position
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UncoverOutcome {
    /// Tile was flagged, or nothing hidden was left to open around it
    NoChange,
    /// Safe tiles were revealed, with how many were newly opened
    Revealed(CellCount),
    /// The uncovered tile was a mine
    HitMine,
}

/// Square grid of tiles. All tile mutation goes through here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    tiles: Array2<Tile>,
    mine_count: CellCount,
}

impl Board {
    pub fn new(layout: MineLayout) -> Self {
        let side = layout.side();
        let tiles = Array2::from_shape_fn(cell((side, side)), |(row, col)| {
            Tile::new(layout[(row as Coord, col as Coord)])
        });
        let mut board = Self {
            tiles,
            mine_count: layout.mine_count(),
        };
        board.count_adjacent_mines();
        board
    }

    pub fn generate(config: GameConfig, generator: impl MinefieldGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    /// Rebuilds a board from row-major tiles, recomputing every adjacency count.
    pub fn from_tiles(side: Coord, tiles: Vec<Tile>) -> Result<Self> {
        if side == 0 {
            return Err(GameError::InvalidSize);
        }
        let side_len = usize::from(side);
        let tiles = Array2::from_shape_vec((side_len, side_len), tiles)
            .map_err(|_| GameError::InvalidBoardShape)?;
        let mine_count = count_mines(tiles.iter().map(Tile::is_mine), side)?;
        let mut board = Self { tiles, mine_count };
        board.count_adjacent_mines();
        Ok(board)
    }

    fn count_adjacent_mines(&mut self) {
        for pos in self.positions() {
            if self.tiles[cell(pos)].is_mine() {
                continue;
            }
            let count = self
                .neighbors(pos)
                .filter(|&neighbor| self.tiles[cell(neighbor)].is_mine())
                .count();
            // at most 8 neighbors
            self.tiles[cell(pos)].set_adjacent_mines(count as u8);
        }
    }

    pub fn side(&self) -> Coord {
        // only ever built from square grids with a side that fits in a Coord
        self.tiles.nrows() as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.side(), self.mine_count)
    }

    pub fn validate_pos(&self, pos: Pos) -> Result<Pos> {
        let side = self.side();
        if pos.0 < side && pos.1 < side {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds(pos.0, pos.1))
        }
    }

    pub fn tile(&self, pos: Pos) -> Result<&Tile> {
        let pos = self.validate_pos(pos)?;
        Ok(&self.tiles[cell(pos)])
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| (row, col)))
    }

    /// In-bounds Moore neighbours of `pos`
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<> {
        neighbors(pos, self.side())
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Toggles the flag at `pos`, returns whether the tile is now flagged
    pub fn flag(&mut self, pos: Pos) -> Result<bool> {
        let pos = self.validate_pos(pos)?;
        let tile = &mut self.tiles[cell(pos)];
        tile.toggle_flag();
        log::debug!("Flag at {:?} is now {}", pos, tile.is_flagged());
        Ok(tile.is_flagged())
    }

    /// Reveals `pos` and floods outwards through tiles with no adjacent mines.
    ///
    /// The revealed marker doubles as the visited set. A tile only expands when it is revealed,
    /// is not a mine, and has no mines around it. Flagged neighbors are still queued but stay
    /// hidden, so they never expand either. Uncovering an already open zero tile expands it
    /// again, which opens tiles that were flagged during the first flood and unflagged since.
    pub fn uncover(&mut self, pos: Pos) -> Result<UncoverOutcome> {
        let pos = self.validate_pos(pos)?;

        let start = self.tiles[cell(pos)];
        if start.is_flagged() {
            return Ok(UncoverOutcome::NoChange);
        }
        if start.is_mine() {
            if start.is_revealed() {
                return Ok(UncoverOutcome::NoChange);
            }
            self.tiles[cell(pos)].reveal();
            log::debug!("Uncovered mine at {:?}", pos);
            return Ok(UncoverOutcome::HitMine);
        }

        let mut opened: CellCount = 0;
        let mut to_visit = VecDeque::from([pos]);

        while let Some(visit_pos) = to_visit.pop_front() {
            let tile = &mut self.tiles[cell(visit_pos)];
            if tile.is_revealed() {
                // queued twice before its first visit, already expanded
                if visit_pos != pos {
                    continue;
                }
            } else {
                tile.reveal();
                if !tile.is_revealed() {
                    log::trace!("Skipping flagged tile at {:?}", visit_pos);
                    continue;
                }
                opened += 1;
            }

            if tile.is_mine() || tile.adjacent_mines() > 0 {
                continue;
            }

            let tiles = &self.tiles;
            to_visit.extend(
                neighbors(visit_pos, self.side())
                    .filter(|&neighbor| !tiles[cell(neighbor)].is_revealed()),
            );
            log::trace!(
                "Flood reached {:?}, {} tiles queued",
                visit_pos,
                to_visit.len()
            );
        }

        log::debug!("Uncovered {} tiles from {:?}", opened, pos);
        Ok(if opened == 0 {
            UncoverOutcome::NoChange
        } else {
            UncoverOutcome::Revealed(opened)
        })
    }

    /// Every mine is flagged and nothing else is
    pub fn is_won(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_mine() == tile.is_flagged())
    }

    /// Some mine has been revealed
    pub fn is_lost(&self) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.is_mine() && tile.is_revealed())
    }

    /// End of game disclosure: drops every flag and reveals every tile
    pub fn reveal_all(&mut self) {
        for tile in self.tiles.iter_mut() {
            if tile.is_flagged() {
                tile.toggle_flag();
            }
            tile.reveal();
        }
    }

    pub fn glyph_at(&self, pos: Pos) -> Result<Glyph> {
        self.tile(pos).map(Tile::glyph)
    }

    /// One glyph per tile, space separated, one line per row
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.tiles.len() * 2);
        for row in self.tiles.rows() {
            let mut first = true;
            for tile in row {
                if !first {
                    out.push(' ');
                }
                first = false;
                out.push(tile.glyph().as_char());
            }
            out.push('\n');
        }
        out
    }
}

/// Save-file shape: the side plus row-major tiles, adjacency counts are derived on load.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    side: Coord,
    tiles: Vec<Tile>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        Self::from_tiles(repr.side, repr.tiles)
    }
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            side: board.side(),
            tiles: board.tiles.iter().copied().collect(),
        }
    }
}
