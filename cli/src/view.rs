use minesweeper_core::render::{self, Decorator, Plain};
use minesweeper_core::{Board, GameOutcome, View};
use std::io::Write;

use crate::color::AnsiDecorator;

/// Prints boards and results to a terminal-like writer.
pub struct TerminalView<W> {
    out: W,
    decorator: Box<dyn Decorator>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        let decorator: Box<dyn Decorator> = if color {
            Box::new(AnsiDecorator)
        } else {
            Box::new(Plain)
        };
        Self { out, decorator }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show_board(&mut self, board: &Board) -> std::io::Result<()> {
        write!(self.out, "{}", render::labeled(board, self.decorator.as_ref()))?;
        self.out.flush()
    }

    fn announce(&mut self, outcome: GameOutcome) -> std::io::Result<()> {
        let message = match outcome {
            GameOutcome::Won => "You win!",
            GameOutcome::Lost => "You lose!",
            GameOutcome::Saved => "Game saved!",
            GameOutcome::Quit => "Game abandoned.",
        };
        writeln!(self.out, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweeper_core::MineLayout;

    #[test]
    fn plain_view_prints_labeled_board() {
        let board = Board::new(MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap());
        let mut out = Vec::new();

        let mut view = TerminalView::new(&mut out, false);
        view.show_board(&board).unwrap();
        view.announce(GameOutcome::Lost).unwrap();
        drop(view);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  1 2\n1 * *\n2 * *\nYou lose!\n"
        );
    }

    #[test]
    fn colored_view_keeps_labels_plain() {
        let board = Board::new(MineLayout::from_mine_coords(2, &[]).unwrap());
        let mut out = Vec::new();

        TerminalView::new(&mut out, true).show_board(&board).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("  1 2\n1 "));
        assert!(printed.contains("\x1b["));
    }
}
