//! Threatened-square detection.
//!
//! Probes every live piece of the attacking color with the same reach
//! predicates the validators use. Only castling consults it; nothing here
//! decides whether a king is in check after an ordinary move.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_shared::{piece_reach, Reach};

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    game_state
        .piece_register
        .live_pieces(attacker_color)
        .any(|(origin, kind)| {
            piece_reach(game_state, Piece::new(kind, attacker_color), origin, square) == Reach::Reaches
        })
}
