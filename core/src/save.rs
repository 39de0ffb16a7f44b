//! Save files: a versioned JSON document holding the whole board.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::Board;

pub const SAVE_FORMAT_VERSION: u32 = 1;

/// File name used when no other path is configured.
pub const DEFAULT_SAVE_FILE: &str = "minesweeper.json";

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Could not access save file")]
    Io(#[from] std::io::Error),
    #[error("Malformed save file")]
    Format(#[from] serde_json::Error),
    #[error("Unsupported save file version {0}, expected {SAVE_FORMAT_VERSION}")]
    UnsupportedVersion(u32),
}

#[derive(Serialize, Deserialize)]
struct SavedGame {
    version: u32,
    board: Board,
}

pub fn write_board<W: Write>(board: &Board, writer: W) -> Result<(), SaveError> {
    #[derive(Serialize)]
    struct SavedGameRef<'a> {
        version: u32,
        board: &'a Board,
    }

    serde_json::to_writer_pretty(
        writer,
        &SavedGameRef {
            version: SAVE_FORMAT_VERSION,
            board,
        },
    )?;
    Ok(())
}

pub fn read_board<R: Read>(reader: R) -> Result<Board, SaveError> {
    let saved: SavedGame = serde_json::from_reader(reader)?;
    if saved.version != SAVE_FORMAT_VERSION {
        log::warn!("Rejecting save file with version {}", saved.version);
        return Err(SaveError::UnsupportedVersion(saved.version));
    }
    Ok(saved.board)
}

/// Somewhere a game in progress can be put aside.
pub trait GameStore {
    fn save(&mut self, board: &Board) -> Result<(), SaveError>;
}

/// Stores the game as JSON at a fixed path, replacing any previous save.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Board, SaveError> {
        let board = read_board(BufReader::new(File::open(&self.path)?))?;
        log::info!(
            "Loaded {}x{} board from {}",
            board.side(),
            board.side(),
            self.path.display()
        );
        Ok(board)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

impl GameStore for JsonFileStore {
    fn save(&mut self, board: &Board) -> Result<(), SaveError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        write_board(board, &mut writer)?;
        writer.flush()?;
        log::info!("Saved game to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, MineLayout, RandomMinefieldGenerator};
    use std::error::Error as _;

    fn played_board() -> Board {
        let mut board = Board::generate(
            GameConfig::new(8, 8).unwrap(),
            RandomMinefieldGenerator::new(5),
        );
        let safe = board
            .positions()
            .find(|&pos| !board.tile(pos).unwrap().is_mine())
            .unwrap();
        let mine = board
            .positions()
            .find(|&pos| board.tile(pos).unwrap().is_mine())
            .unwrap();
        board.uncover(safe).unwrap();
        board.flag(mine).unwrap();
        board
    }

    #[test]
    fn save_then_load_reproduces_board() {
        let board = played_board();
        let mut buffer = Vec::new();

        write_board(&board, &mut buffer).unwrap();
        let loaded = read_board(buffer.as_slice()).unwrap();

        assert_eq!(loaded, board);
        assert_eq!(loaded.render(), board.render());
    }

    #[test]
    fn document_lists_tiles_row_major() {
        let board = Board::new(MineLayout::from_mine_coords(2, &[(0, 1)]).unwrap());
        let mut buffer = Vec::new();
        write_board(&board, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["board"]["side"], 2);
        let tiles = value["board"]["tiles"].as_array().unwrap();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[1]["mine"], true);
        assert_eq!(tiles[0]["mine"], false);
        assert!(tiles[0].get("adjacent_mines").is_none());
    }

    #[test]
    fn rejects_unknown_version() {
        let json = r#"{"version": 7, "board": {"side": 1, "tiles": [{"mine": false, "flagged": false, "revealed": false}]}}"#;
        assert!(matches!(
            read_board(json.as_bytes()),
            Err(SaveError::UnsupportedVersion(7))
        ));
    }

    #[test]
    fn rejects_mismatched_tile_count() {
        let json = r#"{"version": 1, "board": {"side": 2, "tiles": [{"mine": false, "flagged": false, "revealed": false}]}}"#;
        assert!(matches!(
            read_board(json.as_bytes()),
            Err(SaveError::Format(_))
        ));
    }

    #[test]
    fn rejects_board_without_safe_tiles() {
        let json = r#"{"version": 1, "board": {"side": 1, "tiles": [{"mine": true, "flagged": false, "revealed": false}]}}"#;
        let err = read_board(json.as_bytes()).unwrap_err();
        assert!(matches!(err, SaveError::Format(_)));
        assert!(err.source().is_some_and(|cause| cause.to_string().contains("mines")));
    }

    #[test]
    fn file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "minesweeper-save-test-{}.json",
            std::process::id()
        ));
        let board = played_board();
        let mut store = JsonFileStore::new(&path);

        store.save(&board).unwrap();
        let loaded = store.load();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.unwrap(), board);
    }

    #[test]
    fn missing_file_is_io_error() {
        let store = JsonFileStore::new("/nonexistent/dir/minesweeper.json");
        assert!(matches!(store.load(), Err(SaveError::Io(_))));
    }
}
