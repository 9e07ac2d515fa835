//! Two-player game session: turn alternation and the prompt/retry loop.

use std::io::{self, BufRead, Write};

use crate::chess_errors::MoveError;
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_validation::legal_move_apply::MoveOutcome;
use crate::move_validation::move_processor::process_move;
use crate::session::session_config::SessionConfig;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone)]
pub struct GameSession {
    pub game_state: GameState,
    side_to_move: Color,
    moves_played: usize,
    config: SessionConfig,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_game_state(GameState::new_game(), Color::White, config)
    }

    pub fn from_game_state(game_state: GameState, side_to_move: Color, config: SessionConfig) -> Self {
        Self { game_state, side_to_move, moves_played: 0, config }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn prompt(&self) -> String {
        format!("{} to move: ", self.side_to_move)
    }

    pub fn is_quit(&self, raw: &str) -> bool {
        raw.trim() == self.config.quit_token
    }

    /// Plays `raw` for the side to move; the turn passes only on success.
    pub fn submit(&mut self, raw: &str) -> Result<MoveOutcome, MoveError> {
        let outcome = process_move(&mut self.game_state, self.side_to_move, raw.trim())?;
        self.side_to_move = self.side_to_move.opposite();
        self.moves_played += 1;
        Ok(outcome)
    }

    pub fn render(&self) -> String {
        render_game_state(&self.game_state, self.config.board_style)
    }
}

/// Runs the prompt/retry loop until end of input or the quit token.
///
/// Returns the number of moves played.
pub fn run_session(
    config: SessionConfig,
    mut input: impl BufRead,
    mut output: impl Write,
    mut diagnostics: impl Write,
) -> io::Result<usize> {
    let mut session = GameSession::new(config);
    let show_board = session.config().show_board_after_move;
    let verbose = session.config().verbose;

    writeln!(output, "Starting game!")?;
    writeln!(output, "{}", session.render())?;

    let mut line = String::new();
    loop {
        write!(output, "{}", session.prompt())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim();
        if session.is_quit(raw) {
            break;
        }

        let color = session.side_to_move();
        match session.submit(raw) {
            Ok(outcome) => {
                writeln!(
                    output,
                    "Moving {} from {} to {}",
                    outcome.piece,
                    square_to_algebraic(outcome.origin),
                    square_to_algebraic(outcome.target)
                )?;
                if show_board {
                    writeln!(output, "{}", session.render())?;
                }
                if verbose {
                    writeln!(diagnostics, "move {}: {color} '{raw}' accepted: {outcome}", session.moves_played())?;
                }
            }
            Err(err) => {
                writeln!(output, "Illegal move: {err}")?;
                if verbose {
                    writeln!(diagnostics, "{color} '{raw}' rejected: {err:?}")?;
                }
            }
        }
    }

    Ok(session.moves_played())
}
