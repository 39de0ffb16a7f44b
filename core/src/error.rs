use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position ({0}, {1}) is outside the board")]
    OutOfBounds(u8, u8),
    #[error("Too many mines, {mines} do not fit on a board of {tiles} tiles")]
    TooManyMines { mines: u16, tiles: u16 },
    #[error("Board side must be at least 1")]
    InvalidSize,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
