//! Pieces common to every per-kind validator.
//!
//! Each kind contributes a read-only reach predicate; the shared resolver
//! runs it over the register's live candidates and turns the outcome into an
//! origin square or a classified error.

use crate::chess_errors::{IllegalTargetReason, MoveError};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_moves_king::king_reaches;
use crate::move_validation::legal_moves_knight::knight_reaches;
use crate::move_validation::legal_moves_pawn::pawn_attacks;
use crate::move_validation::legal_moves_sliders::{ray_reach, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use crate::moves::move_descriptions::PieceMove;

/// Whether a piece standing on an origin square reaches a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    Reaches,
    /// Geometry fits but a piece stands in between.
    Blocked { blocker_square: Square, blocker: Piece },
    Unreachable,
}

/// Attack geometry of `piece` on `origin` toward `target`.
///
/// The occupant of `target` is ignored and pawns use their capture diagonals,
/// so this answers "does this piece hit that square".
pub fn piece_reach(game_state: &GameState, piece: Piece, origin: Square, target: Square) -> Reach {
    let reaches = |hit: bool| if hit { Reach::Reaches } else { Reach::Unreachable };
    match piece.kind {
        PieceKind::Pawn => reaches(pawn_attacks(piece.color, origin, target)),
        PieceKind::Knight => reaches(knight_reaches(origin, target)),
        PieceKind::King => reaches(king_reaches(origin, target)),
        PieceKind::Bishop => ray_reach(&game_state.board, origin, target, BISHOP_DIRECTIONS),
        PieceKind::Rook => ray_reach(&game_state.board, origin, target, ROOK_DIRECTIONS),
        PieceKind::Queen => ray_reach(&game_state.board, origin, target, QUEEN_DIRECTIONS),
    }
}

/// Rejects targets a lettered piece may not land on given the capture mark.
pub fn check_piece_target(game_state: &GameState, color: Color, piece_move: &PieceMove) -> Result<(), MoveError> {
    let target = piece_move.target;
    let reason = match game_state.board.at(target) {
        Some(occupant) if occupant.color == color => IllegalTargetReason::OccupiedByFriendly(occupant),
        Some(occupant) if !piece_move.is_capture => IllegalTargetReason::MissingCaptureMark(occupant),
        None if piece_move.is_capture => IllegalTargetReason::CaptureOfEmptySquare,
        _ => return Ok(()),
    };
    let suggestion = match reason {
        IllegalTargetReason::MissingCaptureMark(_) => Some(piece_move.with_capture(true).to_string()),
        IllegalTargetReason::CaptureOfEmptySquare => Some(piece_move.with_capture(false).to_string()),
        _ => None,
    };
    Err(MoveError::IllegalTarget { target, reason, suggestion })
}

/// Resolves the single origin for a lettered piece move.
///
/// Candidates come from the register, filtered by the disambiguator. Exactly
/// one reaching candidate is the answer; several is ambiguous; none reports
/// the first blocked path if there was one.
pub fn resolve_piece_origin(
    game_state: &GameState,
    color: Color,
    kind: PieceKind,
    piece_move: &PieceMove,
) -> Result<Square, MoveError> {
    check_piece_target(game_state, color, piece_move)?;

    let piece = Piece::new(kind, color);
    let target = piece_move.target;
    let mut reaching = Vec::new();
    let mut first_blocked = None;

    for origin in game_state.piece_register.live_squares(color, kind) {
        if !piece_move.accepts_origin(origin) {
            continue;
        }
        match piece_reach(game_state, piece, origin, target) {
            Reach::Reaches => reaching.push(origin),
            Reach::Blocked { blocker_square, blocker } if first_blocked.is_none() => {
                first_blocked = Some(MoveError::Blocked { piece, origin, target, blocker, blocker_square });
            }
            Reach::Blocked { .. } => {}
            Reach::Unreachable => {}
        }
    }

    match reaching.as_slice() {
        [origin] => Ok(*origin),
        [] => Err(first_blocked.unwrap_or(MoveError::NoCandidate { piece, target })),
        _ => Err(MoveError::Ambiguous { piece, target, candidates: reaching }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::MoveMover;

    fn knight_to(target: Square, is_capture: bool) -> PieceMove {
        PieceMove { mover: MoveMover::Piece(PieceKind::Knight), is_capture, disambiguator: None, target }
    }

    #[test]
    fn friendly_target_is_illegal() {
        let game_state = GameState::new_game();
        let err = check_piece_target(&game_state, Color::White, &knight_to(11, false)).unwrap_err();
        assert!(matches!(
            err,
            MoveError::IllegalTarget { target: 11, reason: IllegalTargetReason::OccupiedByFriendly(_), suggestion: None }
        ));
    }

    #[test]
    fn capture_marks_must_match_the_target() {
        let game_state = GameState::new_game();
        let err = check_piece_target(&game_state, Color::White, &knight_to(18, true)).unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalTarget {
                target: 18,
                reason: IllegalTargetReason::CaptureOfEmptySquare,
                suggestion: Some("Nc3".to_owned()),
            }
        );

        let game_state = GameState::from_placement("4k3/8/8/4p3/8/5N2/8/4K3").expect("placement should parse");
        let err = check_piece_target(&game_state, Color::White, &knight_to(36, false)).unwrap_err();
        assert!(matches!(
            err,
            MoveError::IllegalTarget { reason: IllegalTargetReason::MissingCaptureMark(_), suggestion: Some(ref s), .. }
                if s == "Nxe5"
        ));
    }

    #[test]
    fn pawn_reach_uses_capture_diagonals() {
        let game_state = GameState::new_game();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(piece_reach(&game_state, pawn, 12, 19), Reach::Reaches);
        assert_eq!(piece_reach(&game_state, pawn, 12, 20), Reach::Unreachable);
    }
}
