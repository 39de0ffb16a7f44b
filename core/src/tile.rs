use serde::{Deserialize, Serialize};

/// State of a single cell. `mine` is fixed for the lifetime of the game,
/// the flag and revealed markers only change through the methods below.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    mine: bool,
    flagged: bool,
    revealed: bool,
    #[serde(skip)]
    adjacent_mines: u8,
}

impl Tile {
    pub const fn new(mine: bool) -> Self {
        Self {
            mine,
            flagged: false,
            revealed: false,
            adjacent_mines: 0,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of mines around this tile, only meaningful when it is not a mine
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        debug_assert!(count <= 8);
        self.adjacent_mines = count;
    }

    /// Flips the flag, revealed tiles can be flagged too
    pub fn toggle_flag(&mut self) {
        self.flagged = !self.flagged;
    }

    /// Reveals the tile unless it is flagged
    pub fn reveal(&mut self) {
        if !self.flagged {
            self.revealed = true;
        }
    }

    pub const fn glyph(&self) -> Glyph {
        if self.flagged {
            Glyph::Flag
        } else if !self.revealed {
            Glyph::Hidden
        } else if self.mine {
            Glyph::Mine
        } else if self.adjacent_mines == 0 {
            Glyph::Empty
        } else {
            Glyph::Count(self.adjacent_mines)
        }
    }
}

/// What a tile looks like to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Flag,
    Hidden,
    Mine,
    Empty,
    Count(u8),
}

impl Glyph {
    pub const FLAG: char = 'F';
    pub const HIDDEN: char = '*';
    pub const MINE: char = '!';
    pub const EMPTY: char = '_';

    pub fn as_char(self) -> char {
        use Glyph::*;
        match self {
            Flag => Self::FLAG,
            Hidden => Self::HIDDEN,
            Mine => Self::MINE,
            Empty => Self::EMPTY,
            Count(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        use Glyph::*;
        match ch {
            Self::FLAG => Some(Flag),
            Self::HIDDEN => Some(Hidden),
            Self::MINE => Some(Mine),
            Self::EMPTY => Some(Empty),
            '1'..='8' => ch.to_digit(10).map(|count| Count(count as u8)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_tile_refuses_to_reveal() {
        let mut tile = Tile::new(false);
        tile.toggle_flag();
        tile.reveal();
        assert!(tile.is_flagged());
        assert!(!tile.is_revealed());
    }

    #[test]
    fn unflagging_restores_reveal() {
        let mut tile = Tile::new(true);
        tile.toggle_flag();
        tile.reveal();
        tile.toggle_flag();
        assert!(!tile.is_flagged());
        assert!(!tile.is_revealed());

        tile.reveal();
        assert!(tile.is_revealed());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut tile = Tile::new(false);
        tile.reveal();
        tile.reveal();
        assert!(tile.is_revealed());
    }

    #[test]
    fn revealed_tile_can_still_be_flagged() {
        let mut tile = Tile::new(false);
        tile.reveal();
        tile.toggle_flag();
        assert!(tile.is_flagged());
        assert!(tile.is_revealed());
        assert_eq!(tile.glyph(), Glyph::Flag);
    }

    #[test]
    fn glyph_precedence() {
        let mut mine = Tile::new(true);
        assert_eq!(mine.glyph(), Glyph::Hidden);
        mine.reveal();
        assert_eq!(mine.glyph(), Glyph::Mine);

        let mut empty = Tile::new(false);
        empty.reveal();
        assert_eq!(empty.glyph(), Glyph::Empty);

        let mut numbered = Tile::new(false);
        numbered.set_adjacent_mines(3);
        numbered.reveal();
        assert_eq!(numbered.glyph(), Glyph::Count(3));
        assert_eq!(numbered.glyph().as_char(), '3');
    }

    #[test]
    fn glyph_chars_map_back() {
        for glyph in [
            Glyph::Flag,
            Glyph::Hidden,
            Glyph::Mine,
            Glyph::Empty,
            Glyph::Count(1),
            Glyph::Count(8),
        ] {
            assert_eq!(Glyph::from_char(glyph.as_char()), Some(glyph));
        }
        assert_eq!(Glyph::from_char('0'), None);
        assert_eq!(Glyph::from_char(' '), None);
    }
}
