//! Pawn move validation.
//!
//! Advances go straight ahead onto an empty square, one step or two from the
//! starting rank. Captures come from the file named in the notation, one
//! rank behind the target, onto an enemy piece.

use crate::chess_errors::{IllegalTargetReason, MoveError};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{MoveMover, PieceMove};

/// Whether a `color` pawn on `origin` attacks `target` diagonally.
#[inline]
pub fn pawn_attacks(color: Color, origin: Square, target: Square) -> bool {
    let d_rank = square_rank(target) as i8 - square_rank(origin) as i8;
    let d_file = square_file(target) as i8 - square_file(origin) as i8;
    d_rank == color.pawn_direction() && d_file.abs() == 1
}

pub fn validate_pawn_move(game_state: &GameState, color: Color, piece_move: &PieceMove) -> Result<Square, MoveError> {
    match piece_move.mover {
        MoveMover::Pawn { from_file: Some(from_file) } => validate_pawn_capture(game_state, color, from_file, piece_move.target),
        _ => validate_pawn_advance(game_state, color, piece_move.target),
    }
}

fn validate_pawn_advance(game_state: &GameState, color: Color, target: Square) -> Result<Square, MoveError> {
    let board = &game_state.board;
    let pawn = Piece::new(PieceKind::Pawn, color);
    let direction = color.pawn_direction();

    if square_rank(target) == color.back_rank() {
        return Err(MoveError::IllegalTarget { target, reason: IllegalTargetReason::PawnBackRank, suggestion: None });
    }
    if let Some(occupant) = board.at(target) {
        if occupant.color == color {
            let reason = IllegalTargetReason::OccupiedByFriendly(occupant);
            return Err(MoveError::IllegalTarget { target, reason, suggestion: None });
        }
        return Err(MoveError::IllegalTarget {
            target,
            reason: IllegalTargetReason::PawnAdvanceBlocked(occupant),
            suggestion: capture_hint(game_state, color, target),
        });
    }

    let one_behind = offset_square(target, 0, -direction).ok_or(MoveError::NoCandidate { piece: pawn, target })?;
    if board.at(one_behind) == Some(pawn) {
        return Ok(one_behind);
    }

    let two_behind = offset_square(target, 0, -2 * direction)
        .filter(|origin| square_rank(*origin) == color.pawn_start_rank() && board.at(*origin) == Some(pawn))
        .ok_or(MoveError::NoCandidate { piece: pawn, target })?;

    match board.at(one_behind) {
        None => Ok(two_behind),
        Some(blocker) => Err(MoveError::Blocked { piece: pawn, origin: two_behind, target, blocker, blocker_square: one_behind }),
    }
}

fn validate_pawn_capture(game_state: &GameState, color: Color, from_file: File, target: Square) -> Result<Square, MoveError> {
    let pawn = Piece::new(PieceKind::Pawn, color);
    let no_candidate = MoveError::NoCandidate { piece: pawn, target };

    if (from_file as i8 - square_file(target) as i8).abs() != 1 {
        return Err(no_candidate);
    }

    match game_state.board.at(target) {
        Some(occupant) if occupant.color == color => {
            return Err(MoveError::IllegalTarget {
                target,
                reason: IllegalTargetReason::OccupiedByFriendly(occupant),
                suggestion: None,
            })
        }
        None => {
            let suggestion = validate_pawn_advance(game_state, color, target)
                .ok()
                .map(|_| advance(target).to_string());
            return Err(MoveError::IllegalTarget {
                target,
                reason: IllegalTargetReason::CaptureOfEmptySquare,
                suggestion,
            });
        }
        Some(_) => {}
    }

    let origin_rank = square_rank(target) as i8 - color.pawn_direction();
    if !(0..8).contains(&origin_rank) {
        return Err(no_candidate);
    }
    let origin = square_from_file_rank(from_file, origin_rank as Rank);
    if game_state.board.at(origin) != Some(pawn) {
        return Err(no_candidate);
    }
    Ok(origin)
}

/// `<file>x<target>` for the first friendly pawn that attacks `target`.
fn capture_hint(game_state: &GameState, color: Color, target: Square) -> Option<String> {
    let pawn = Piece::new(PieceKind::Pawn, color);
    [-1i8, 1]
        .into_iter()
        .filter_map(|d_file| offset_square(target, d_file, -color.pawn_direction()))
        .find(|origin| game_state.board.at(*origin) == Some(pawn) && pawn_attacks(color, *origin, target))
        .map(|origin| capture(square_file(origin), target).to_string())
}

fn advance(target: Square) -> PieceMove {
    PieceMove { mover: MoveMover::Pawn { from_file: None }, is_capture: false, disambiguator: None, target }
}

fn capture(from_file: File, target: Square) -> PieceMove {
    PieceMove { mover: MoveMover::Pawn { from_file: Some(from_file) }, is_capture: true, disambiguator: None, target }
}
