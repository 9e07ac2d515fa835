//! Bishop, rook and queen validation.
//!
//! All three share one ray walk; they differ only in the step directions
//! they are allowed to use.

use crate::chess_errors::MoveError;
use crate::game_state::board::Board;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_shared::{resolve_piece_origin, Reach};
use crate::moves::move_descriptions::PieceMove;

/// Unit step as `(d_file, d_rank)`.
pub type Direction = (i8, i8);

pub const BISHOP_DIRECTIONS: &[Direction] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: &[Direction] = &[(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const QUEEN_DIRECTIONS: &[Direction] = &[(1, 1), (1, -1), (-1, 1), (-1, -1), (1, 0), (-1, 0), (0, 1), (0, -1)];

/// Unit step leading from `origin` to `target`, if they share a line in
/// one of `directions`.
pub fn ray_direction(origin: Square, target: Square, directions: &[Direction]) -> Option<Direction> {
    if origin == target {
        return None;
    }
    let d_file = square_file(target) as i8 - square_file(origin) as i8;
    let d_rank = square_rank(target) as i8 - square_rank(origin) as i8;
    if d_file != 0 && d_rank != 0 && d_file.abs() != d_rank.abs() {
        return None;
    }
    let step = (d_file.signum(), d_rank.signum());
    directions.contains(&step).then_some(step)
}

/// Walks from `origin` toward `target` and reports the first occupied
/// square strictly between them.
pub fn ray_reach(board: &Board, origin: Square, target: Square, directions: &[Direction]) -> Reach {
    let Some((d_file, d_rank)) = ray_direction(origin, target, directions) else {
        return Reach::Unreachable;
    };

    let mut square = origin;
    while let Some(next) = offset_square(square, d_file, d_rank) {
        if next == target {
            return Reach::Reaches;
        }
        if let Some(blocker) = board.at(next) {
            return Reach::Blocked { blocker_square: next, blocker };
        }
        square = next;
    }
    Reach::Unreachable
}

pub fn validate_bishop_move(game_state: &GameState, color: Color, piece_move: &PieceMove) -> Result<Square, MoveError> {
    resolve_piece_origin(game_state, color, PieceKind::Bishop, piece_move)
}

pub fn validate_rook_move(game_state: &GameState, color: Color, piece_move: &PieceMove) -> Result<Square, MoveError> {
    resolve_piece_origin(game_state, color, PieceKind::Rook, piece_move)
}

pub fn validate_queen_move(game_state: &GameState, color: Color, piece_move: &PieceMove) -> Result<Square, MoveError> {
    resolve_piece_origin(game_state, color, PieceKind::Queen, piece_move)
}
