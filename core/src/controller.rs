use thiserror::Error;

use crate::save::{GameStore, SaveError};
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

/// One validated player command, positions are 0-indexed and inside the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Action, Pos),
    Save,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    Saved,
    Quit,
}

impl GameOutcome {
    /// Whether the board gets fully disclosed once the game stops
    pub const fn reveals_board(self) -> bool {
        match self {
            Self::Won => true,
            Self::Lost => true,
            Self::Saved => false,
            Self::Quit => true,
        }
    }
}

/// Supplies commands, re-prompting on its own until the input is valid.
pub trait MoveSource {
    fn next_command(&mut self, side: Coord) -> std::io::Result<Command>;
}

/// Shows the game to the player.
pub trait View {
    fn show_board(&mut self, board: &Board) -> std::io::Result<()>;
    fn announce(&mut self, outcome: GameOutcome) -> std::io::Result<()>;
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Terminal I/O failed")]
    Io(#[from] std::io::Error),
    #[error("Could not save the game")]
    Save(#[from] SaveError),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Runs the turn loop: show, read, apply, check for the end of the game.
pub struct GameController<S, V, G> {
    board: Board,
    source: S,
    view: V,
    store: G,
}

impl<S: MoveSource, V: View, G: GameStore> GameController<S, V, G> {
    pub fn new(board: Board, source: S, view: V, store: G) -> Self {
        Self {
            board,
            source,
            view,
            store,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_parts(self) -> (Board, S, V, G) {
        (self.board, self.source, self.view, self.store)
    }

    pub fn apply(&mut self, action: Action, pos: Pos) -> Result<()> {
        match action {
            Action::Flag => {
                self.board.flag(pos)?;
            }
            Action::Reveal => {
                let outcome = self.board.uncover(pos)?;
                log::debug!("Reveal at {:?}: {:?}", pos, outcome);
            }
        }
        Ok(())
    }

    /// Current outcome if the game is over
    pub fn finished(&self) -> Option<GameOutcome> {
        if self.board.is_lost() {
            Some(GameOutcome::Lost)
        } else if self.board.is_won() {
            Some(GameOutcome::Won)
        } else {
            None
        }
    }

    pub fn run(&mut self) -> core::result::Result<GameOutcome, SessionError> {
        let outcome = loop {
            self.view.show_board(&self.board)?;

            match self.source.next_command(self.board.side())? {
                Command::Save => {
                    self.store.save(&self.board)?;
                    break GameOutcome::Saved;
                }
                Command::Quit => break GameOutcome::Quit,
                Command::Move(action, pos) => self.apply(action, pos)?,
            }

            if let Some(outcome) = self.finished() {
                break outcome;
            }
        };
        log::info!("Game ended: {:?}", outcome);

        self.view.announce(outcome)?;
        if outcome.reveals_board() {
            self.board.reveal_all();
            self.view.show_board(&self.board)?;
        }
        Ok(outcome)
    }
}
