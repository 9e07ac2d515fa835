//! Knight move validation.

use crate::chess_errors::MoveError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_shared::resolve_piece_origin;
use crate::moves::move_descriptions::PieceMove;

/// L-shape test: `(|d_file|, |d_rank|)` is `(1, 2)` or `(2, 1)`.
#[inline]
pub fn knight_reaches(origin: Square, target: Square) -> bool {
    let d_file = square_file(origin).abs_diff(square_file(target));
    let d_rank = square_rank(origin).abs_diff(square_rank(target));
    matches!((d_file, d_rank), (1, 2) | (2, 1))
}

pub fn validate_knight_move(game_state: &GameState, color: Color, piece_move: &PieceMove) -> Result<Square, MoveError> {
    resolve_piece_origin(game_state, color, PieceKind::Knight, piece_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{Disambiguator, MoveMover};

    fn knight_move(target: Square, disambiguator: Option<Disambiguator>) -> PieceMove {
        PieceMove { mover: MoveMover::Piece(PieceKind::Knight), is_capture: false, disambiguator, target }
    }

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!((0..64u8).filter(|target| knight_reaches(d4, *target)).count(), 8);
        assert!(!knight_reaches(0, 63));
    }

    #[test]
    fn unique_knight_is_found_from_start() {
        let game_state = GameState::new_game();
        assert_eq!(validate_knight_move(&game_state, Color::White, &knight_move(18, None)), Ok(1));
        assert_eq!(validate_knight_move(&game_state, Color::Black, &knight_move(45, None)), Ok(62));
        assert!(matches!(
            validate_knight_move(&game_state, Color::White, &knight_move(28, None)),
            Err(MoveError::NoCandidate { target: 28, .. })
        ));
    }

    #[test]
    fn shared_target_needs_a_disambiguator() {
        // Knights on b1 and f3 both reach d2.
        let game_state = GameState::from_placement("4k3/8/8/8/8/5N2/8/1N2K3").expect("placement should parse");
        assert_eq!(
            validate_knight_move(&game_state, Color::White, &knight_move(11, None)),
            Err(MoveError::Ambiguous {
                piece: Piece::new(PieceKind::Knight, Color::White),
                target: 11,
                candidates: vec![1, 21],
            })
        );
        assert_eq!(
            validate_knight_move(&game_state, Color::White, &knight_move(11, Some(Disambiguator::File(1)))),
            Ok(1)
        );
        assert_eq!(
            validate_knight_move(&game_state, Color::White, &knight_move(11, Some(Disambiguator::Rank(2)))),
            Ok(21)
        );
        assert!(matches!(
            validate_knight_move(&game_state, Color::White, &knight_move(11, Some(Disambiguator::File(0)))),
            Err(MoveError::NoCandidate { .. })
        ));
    }
}
