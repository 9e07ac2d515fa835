//! King move validation.
//!
//! The register holds one king per color, so there is no candidate search:
//! the king's square either reaches the target or nothing does.

use crate::chess_errors::MoveError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_shared::check_piece_target;
use crate::moves::move_descriptions::PieceMove;

/// One step in any direction: `max(|d_file|, |d_rank|) == 1`.
#[inline]
pub fn king_reaches(origin: Square, target: Square) -> bool {
    let d_file = square_file(origin).abs_diff(square_file(target));
    let d_rank = square_rank(origin).abs_diff(square_rank(target));
    d_file.max(d_rank) == 1
}

pub fn validate_king_move(game_state: &GameState, color: Color, piece_move: &PieceMove) -> Result<Square, MoveError> {
    check_piece_target(game_state, color, piece_move)?;

    let target = piece_move.target;
    game_state
        .piece_register
        .king_square(color)
        .filter(|origin| piece_move.accepts_origin(*origin) && king_reaches(*origin, target))
        .ok_or(MoveError::NoCandidate { piece: Piece::new(PieceKind::King, color), target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::IllegalTargetReason;
    use crate::moves::move_descriptions::{Disambiguator, MoveMover};

    fn king_move(target: Square, is_capture: bool) -> PieceMove {
        PieceMove { mover: MoveMover::Piece(PieceKind::King), is_capture, disambiguator: None, target }
    }

    #[test]
    fn king_steps_one_square() {
        assert!(king_reaches(27, 36));
        assert!(king_reaches(27, 26));
        assert!(!king_reaches(27, 27));
        assert!(!king_reaches(27, 29));
        assert!(!king_reaches(7, 8));
    }

    #[test]
    fn king_moves_and_captures() {
        let game_state = GameState::from_placement("4k3/8/8/8/8/8/3p4/4K3").expect("placement should parse");
        assert_eq!(validate_king_move(&game_state, Color::White, &king_move(5, false)), Ok(4));
        assert_eq!(validate_king_move(&game_state, Color::White, &king_move(11, true)), Ok(4));
        assert!(matches!(
            validate_king_move(&game_state, Color::White, &king_move(11, false)),
            Err(MoveError::IllegalTarget { reason: IllegalTargetReason::MissingCaptureMark(_), .. })
        ));
        assert!(matches!(
            validate_king_move(&game_state, Color::White, &king_move(20, false)),
            Err(MoveError::NoCandidate { .. })
        ));
    }

    #[test]
    fn own_pieces_block_the_king_at_start() {
        let game_state = GameState::new_game();
        assert!(matches!(
            validate_king_move(&game_state, Color::White, &king_move(12, false)),
            Err(MoveError::IllegalTarget { reason: IllegalTargetReason::OccupiedByFriendly(_), .. })
        ));
    }

    #[test]
    fn captured_king_or_wrong_disambiguator_has_no_candidate() {
        let mut game_state = GameState::from_placement("4k3/8/8/8/8/8/8/4K3").expect("placement should parse");
        let to_d2 = PieceMove { disambiguator: Some(Disambiguator::File(3)), ..king_move(11, false) };
        assert!(matches!(
            validate_king_move(&game_state, Color::White, &to_d2),
            Err(MoveError::NoCandidate { target: 11, .. })
        ));
        let from_e = PieceMove { disambiguator: Some(Disambiguator::Rank(0)), ..to_d2 };
        assert_eq!(validate_king_move(&game_state, Color::White, &from_e), Ok(4));

        let king = Piece::new(PieceKind::King, Color::White);
        game_state.piece_register.mark_captured(king, 4).expect("e1 king is live");
        game_state.board.set(4, None);
        assert!(matches!(
            validate_king_move(&game_state, Color::White, &king_move(11, false)),
            Err(MoveError::NoCandidate { .. })
        ));
    }
}
