//! Single entry point from raw notation to an applied move.

use crate::chess_errors::MoveError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_apply::{apply_castle, apply_move, MoveOutcome};
use crate::move_validation::legal_moves_castling::validate_castle;
use crate::move_validation::legal_moves_king::validate_king_move;
use crate::move_validation::legal_moves_knight::validate_knight_move;
use crate::move_validation::legal_moves_pawn::validate_pawn_move;
use crate::move_validation::legal_moves_sliders::{validate_bishop_move, validate_queen_move, validate_rook_move};
use crate::moves::move_descriptions::{MoveDescriptor, PieceMove};
use crate::notation::notation_parser::parse_move;

/// Parses `raw_move`, validates it for `color` and applies it.
///
/// On any error the game state is left untouched.
pub fn process_move(game_state: &mut GameState, color: Color, raw_move: &str) -> Result<MoveOutcome, MoveError> {
    match parse_move(raw_move)? {
        MoveDescriptor::Castle(side) => {
            let layout = validate_castle(game_state, color, side)?;
            apply_castle(game_state, layout)
        }
        MoveDescriptor::Regular(piece_move) => {
            let origin = validate_piece_move(game_state, color, &piece_move)?;
            apply_move(game_state, origin, piece_move.target)
        }
    }
}

/// Resolves the origin square of a non-castling move without applying it.
pub fn validate_piece_move(game_state: &GameState, color: Color, piece_move: &PieceMove) -> Result<Square, MoveError> {
    match piece_move.mover.kind() {
        PieceKind::Pawn => validate_pawn_move(game_state, color, piece_move),
        PieceKind::Knight => validate_knight_move(game_state, color, piece_move),
        PieceKind::Bishop => validate_bishop_move(game_state, color, piece_move),
        PieceKind::Rook => validate_rook_move(game_state, color, piece_move),
        PieceKind::Queen => validate_queen_move(game_state, color, piece_move),
        PieceKind::King => validate_king_move(game_state, color, piece_move),
    }
}
