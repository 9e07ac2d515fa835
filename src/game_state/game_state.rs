//! Board plus piece register, the state a move is validated against.
//!
//! Both halves are created together and only the move applicator mutates
//! them afterwards, so they always agree square for square.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::game_state::piece_register::PieceRegister;
use crate::utils::placement::{generate_placement, parse_placement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub piece_register: PieceRegister,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for file in 0..8u8 {
            let kind = BACK_RANK_LAYOUT[file as usize];
            board.set(square_from_file_rank(file, 0), Some(Piece::new(kind, Color::White)));
            board.set(square_from_file_rank(file, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(square_from_file_rank(file, 6), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set(square_from_file_rank(file, 7), Some(Piece::new(kind, Color::Black)));
        }
        Self::from_board(board)
    }

    /// Wraps `board` with a register built from it.
    pub fn from_board(board: Board) -> Self {
        let piece_register = PieceRegister::from_board(&board);
        Self { board, piece_register }
    }

    #[inline]
    pub fn from_placement(placement: &str) -> Result<Self, String> {
        parse_placement(placement)
    }

    #[inline]
    pub fn get_placement(&self) -> String {
        generate_placement(self)
    }

    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.piece_register.is_consistent_with(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_standard_layout() {
        let game_state = GameState::new_game();
        assert_eq!(game_state.get_placement(), STARTING_PLACEMENT);
        assert_eq!(game_state.board.occupied().count(), 32);
        assert_eq!(game_state.board.at(4), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(game_state.board.at(59), Some(Piece::new(PieceKind::Queen, Color::Black)));
        for rank in 2..6u8 {
            for file in 0..8u8 {
                assert!(game_state.board.is_empty(square_from_file_rank(file, rank)));
            }
        }
    }

    #[test]
    fn new_game_register_agrees_with_board() {
        let game_state = GameState::new_game();
        assert!(game_state.is_consistent());
        let knights: Vec<_> = game_state.piece_register.live_squares(Color::White, PieceKind::Knight).collect();
        assert_eq!(knights, vec![1, 6]);
        assert_eq!(game_state.piece_register.king_square(Color::Black), Some(60));
        assert_eq!(game_state.piece_register.live_squares(Color::Black, PieceKind::Pawn).count(), 8);
    }

    #[test]
    fn placement_and_new_game_agree() {
        let parsed = GameState::from_placement(STARTING_PLACEMENT).expect("starting placement should parse");
        assert_eq!(parsed, GameState::new_game());
    }
}
