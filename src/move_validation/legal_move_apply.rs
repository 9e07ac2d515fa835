//! Commits validated moves to the game state.
//!
//! The only code that mutates `Board` or `PieceRegister`. The target and the
//! register lookups are checked before anything is written, so a failure
//! leaves the state exactly as it was.

use std::fmt;

use crate::chess_errors::{IllegalTargetReason, MoveError};
use crate::game_state::chess_rules::CastlingLayout;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub origin: Square,
    pub target: Square,
    pub captured: Option<Piece>,
    /// Rook origin and destination when castling; `piece` is then the king.
    pub rook_move: Option<(Square, Square)>,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.piece,
            square_to_algebraic(self.origin),
            square_to_algebraic(self.target)
        )?;
        if let Some(captured) = self.captured {
            write!(f, ", captures {captured}")?;
        }
        if let Some((rook_from, rook_to)) = self.rook_move {
            write!(f, ", rook {} -> {}", square_to_algebraic(rook_from), square_to_algebraic(rook_to))?;
        }
        Ok(())
    }
}

/// Moves the piece on `origin` to `target`, capturing whatever stands there.
pub fn apply_move(game_state: &mut GameState, origin: Square, target: Square) -> Result<MoveOutcome, MoveError> {
    let piece = game_state.board.at(origin).ok_or(MoveError::EmptyOrigin(origin))?;
    let captured = game_state.board.at(target);
    if let Some(occupant) = captured.filter(|occupant| occupant.color == piece.color) {
        return Err(MoveError::IllegalTarget {
            target,
            reason: IllegalTargetReason::OccupiedByFriendly(occupant),
            suggestion: None,
        });
    }

    let register = &mut game_state.piece_register;
    if !register.contains_live(piece, origin) {
        return Err(MoveError::RegisterOutOfSync { piece, square: origin });
    }
    if let Some(victim) = captured {
        if !register.contains_live(victim, target) {
            return Err(MoveError::RegisterOutOfSync { piece: victim, square: target });
        }
        register.mark_captured(victim, target)?;
    }
    register.relocate(piece, origin, target)?;

    game_state.board.set(target, Some(piece));
    game_state.board.set(origin, None);

    debug_assert!(game_state.is_consistent(), "board and register diverged");
    Ok(MoveOutcome { piece, origin, target, captured, rook_move: None })
}

/// Moves king and rook for a castling move already cleared by the validator.
pub fn apply_castle(game_state: &mut GameState, layout: CastlingLayout) -> Result<MoveOutcome, MoveError> {
    let king_move = apply_move(game_state, layout.king_from, layout.king_to)?;
    if let Err(err) = apply_move(game_state, layout.rook_from, layout.rook_to) {
        apply_move(game_state, layout.king_to, layout.king_from)?;
        return Err(err);
    }
    Ok(MoveOutcome { rook_move: Some((layout.rook_from, layout.rook_to)), ..king_move })
}
