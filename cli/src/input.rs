use minesweeper_core::{Action, Command, Coord, MoveSource, Pos};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Wrong number of inputs!")]
    WrongArity,
    #[error("Wrong action: {0}")]
    UnknownAction(String),
    #[error("Invalid {axis} coordinate: {value}")]
    InvalidCoordinate { axis: &'static str, value: String },
}

fn parse_coord(token: &str, axis: &'static str, side: Coord) -> Result<Coord, ParseCommandError> {
    match token.parse::<Coord>() {
        Ok(value) if (1..=side).contains(&value) => Ok(value - 1),
        _ => Err(ParseCommandError::InvalidCoordinate {
            axis,
            value: token.to_string(),
        }),
    }
}

/// Parses `action,row,col` (1-indexed) or a bare `save`/`quit`.
///
/// Tokens may be separated by commas and/or whitespace, case does not matter.
pub fn parse_command(line: &str, side: Coord) -> Result<Command, ParseCommandError> {
    let line = line.trim().to_lowercase();
    let tokens: Vec<&str> = line
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    match tokens.as_slice() {
        ["save"] => Ok(Command::Save),
        ["quit" | "q"] => Ok(Command::Quit),
        [action, row, col] => {
            let action = match *action {
                "r" | "reveal" => Action::Reveal,
                "f" | "flag" => Action::Flag,
                other => return Err(ParseCommandError::UnknownAction(other.to_string())),
            };
            let pos: Pos = (parse_coord(row, "row", side)?, parse_coord(col, "column", side)?);
            Ok(Command::Move(action, pos))
        }
        _ => Err(ParseCommandError::WrongArity),
    }
}

/// Reads commands line by line, complaining and asking again on bad input.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> MoveSource for Prompt<R, W> {
    fn next_command(&mut self, side: Coord) -> std::io::Result<Command> {
        let mut line = String::new();
        loop {
            writeln!(
                self.output,
                "Enter a move (r/f,row,col) with 1 to {side}, or type save/quit"
            )?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("Input closed, quitting");
                return Ok(Command::Quit);
            }

            match parse_command(&line, side) {
                Ok(command) => return Ok(command),
                Err(err) => {
                    log::debug!("Rejected input {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_to_zero_indexed_positions() {
        assert_eq!(
            parse_command("r,1,1", 9),
            Ok(Command::Move(Action::Reveal, (0, 0)))
        );
        assert_eq!(
            parse_command("F, 9, 3\n", 9),
            Ok(Command::Move(Action::Flag, (8, 2)))
        );
        assert_eq!(
            parse_command("reveal 2 5", 9),
            Ok(Command::Move(Action::Reveal, (1, 4)))
        );
    }

    #[test]
    fn parses_save_and_quit() {
        assert_eq!(parse_command("save", 9), Ok(Command::Save));
        assert_eq!(parse_command(" SAVE \n", 9), Ok(Command::Save));
        assert_eq!(parse_command("q", 9), Ok(Command::Quit));
        assert_eq!(parse_command("quit", 9), Ok(Command::Quit));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(parse_command("", 9), Err(ParseCommandError::WrongArity));
        assert_eq!(parse_command("r,1", 9), Err(ParseCommandError::WrongArity));
        assert_eq!(
            parse_command("r,1,1,1", 9),
            Err(ParseCommandError::WrongArity)
        );
    }

    #[test]
    fn rejects_unknown_action() {
        assert_eq!(
            parse_command("x,1,1", 9),
            Err(ParseCommandError::UnknownAction("x".into()))
        );
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        for line in ["r,0,1", "r,10,1", "r,1,-1", "r,a,1", "r,1,300"] {
            assert!(
                matches!(
                    parse_command(line, 9),
                    Err(ParseCommandError::InvalidCoordinate { .. })
                ),
                "{line}"
            );
        }
        assert_eq!(
            parse_command("r,1,10", 9),
            Err(ParseCommandError::InvalidCoordinate {
                axis: "column",
                value: "10".into()
            })
        );
    }

    #[test]
    fn prompt_reprompts_until_valid() {
        let input = b"nonsense\nr,4,1\nf,2,2\n".as_slice();
        let mut output = Vec::new();

        let command = Prompt::new(input, &mut output).next_command(3).unwrap();

        assert_eq!(command, Command::Move(Action::Flag, (1, 1)));
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Wrong number of inputs!"));
        assert!(printed.contains("Invalid row coordinate: 4"));
        assert_eq!(printed.matches("Enter a move").count(), 3);
    }

    #[test]
    fn prompt_quits_on_end_of_input() {
        let mut output = Vec::new();
        let command = Prompt::new(b"".as_slice(), &mut output)
            .next_command(3)
            .unwrap();
        assert_eq!(command, Command::Quit);
    }
}
