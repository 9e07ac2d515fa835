//! Castling validation (`o-o` / `o-o-o`).
//!
//! King and rook must stand on their starting squares with nothing between
//! them, and no square the king crosses or lands on may be attacked.

use crate::chess_errors::{CastlingObstacle, MoveError};
use crate::game_state::chess_rules::CastlingLayout;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_checks::is_square_attacked;

pub fn validate_castle(game_state: &GameState, color: Color, side: CastlingSide) -> Result<CastlingLayout, MoveError> {
    let board = &game_state.board;
    let layout = CastlingLayout::for_side(color, side);
    let blocked = |reason| MoveError::CastlingBlocked { side, reason };

    if board.at(layout.king_from) != Some(Piece::new(PieceKind::King, color)) {
        return Err(blocked(CastlingObstacle::KingNotOnOrigin));
    }
    if board.at(layout.rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
        return Err(blocked(CastlingObstacle::RookNotOnOrigin));
    }
    if let Some(square) = layout.between_squares().find(|square| !board.is_empty(*square)) {
        return Err(blocked(CastlingObstacle::PathOccupied(square)));
    }
    if let Some(square) = layout.king_path().find(|square| is_square_attacked(game_state, *square, color.opposite())) {
        return Err(blocked(CastlingObstacle::SquareAttacked(square)));
    }

    Ok(layout)
}
