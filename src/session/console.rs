//! Line-oriented console front-end.
//!
//! Reads coordinate moves and a handful of commands from stdin, forwards them
//! to a `GameSession`, and prints the board and game status to stdout.

use std::io::{self, BufRead, Write};

use crate::move_generation::legal_move_generator::GameStatus;
use crate::session::game_session::GameSession;
use crate::utils::algebraic::{algebraic_to_square, parse_coordinate_move, square_to_algebraic};
use crate::utils::render_game_state::render_game_state;

const HELP_TEXT: &str = "\
commands:
  e2e4            play a move given as start and end squares
  moves [square]  list legal moves, optionally only from one square
  undo | z        take back the last move
  reset | r       return to the starting position
  board | d       print the board
  fen             print the position as FEN
  status          print whose turn it is and the game status
  help            show this text
  quit | exit     leave";

pub fn run_stdio_loop(initial_fen: Option<&str>) -> io::Result<()> {
    let session = match initial_fen {
        Some(fen) => GameSession::from_fen(fen)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?,
        None => GameSession::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(session);

    writeln!(stdout, "{}", render_game_state(console.session.game_state()))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    session: GameSession,
}

impl ConsoleState {
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handles one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(false);
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" | "d" => writeln!(out, "{}", render_game_state(self.session.game_state()))?,
            "fen" => writeln!(out, "{}", self.session.game_state().get_fen())?,
            "status" => self.write_status(out)?,
            "moves" => self.write_moves(parts.next(), out)?,
            "undo" | "z" => match self.session.undo() {
                Ok(mv) => {
                    writeln!(out, "undid {mv}")?;
                    writeln!(out, "{}", render_game_state(self.session.game_state()))?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "reset" | "r" => {
                self.session.reset();
                writeln!(out, "{}", render_game_state(self.session.game_state()))?;
            }
            other => match parse_coordinate_move(other) {
                Ok((start, end)) => match self.session.try_move(start, end) {
                    Ok(_) => {
                        writeln!(out, "{}", render_game_state(self.session.game_state()))?;
                        self.write_game_over(out)?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                Err(_) => writeln!(out, "error: unknown command '{other}' (try 'help')")?,
            },
        }

        Ok(false)
    }

    fn write_moves(&self, from: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let listed: Vec<String> = match from {
            Some(text) => match algebraic_to_square(text) {
                Ok(square) => self
                    .session
                    .destinations_from(square)
                    .into_iter()
                    .map(|end| format!("{}{}", square_to_algebraic(square), square_to_algebraic(end)))
                    .collect(),
                Err(err) => return writeln!(out, "error: {err}"),
            },
            None => self
                .session
                .legal_moves()
                .iter()
                .map(|mv| mv.chess_notation())
                .collect(),
        };

        writeln!(out, "{}", listed.join(" "))
    }

    fn write_status(&self, out: &mut impl Write) -> io::Result<()> {
        match self.session.status() {
            GameStatus::InProgress => {
                let check = if self.session.game_state().in_check() {
                    " (in check)"
                } else {
                    ""
                };
                writeln!(out, "{} to move{check}", self.session.side_to_move().name())
            }
            status => writeln!(out, "{status}"),
        }
    }

    fn write_game_over(&self, out: &mut impl Write) -> io::Result<()> {
        let status = self.session.status();
        if status.is_terminal() {
            writeln!(out, "{status}")?;
        }
        Ok(())
    }
}
