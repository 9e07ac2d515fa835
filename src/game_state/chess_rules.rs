//! Canonical chess-rule constants.
//!
//! Static layout literals: the standard starting placement and the fixed
//! king/rook squares castling depends on.

use crate::game_state::chess_types::{CastlingSide, Color, PieceKind, Square};

/// Standard starting position, board field of a FEN string.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// King and rook squares for one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLayout {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

impl CastlingLayout {
    pub const fn for_side(color: Color, side: CastlingSide) -> Self {
        match (color, side) {
            (Color::White, CastlingSide::Short) => Self { king_from: 4, king_to: 6, rook_from: 7, rook_to: 5 },
            (Color::White, CastlingSide::Long) => Self { king_from: 4, king_to: 2, rook_from: 0, rook_to: 3 },
            (Color::Black, CastlingSide::Short) => Self { king_from: 60, king_to: 62, rook_from: 63, rook_to: 61 },
            (Color::Black, CastlingSide::Long) => Self { king_from: 60, king_to: 58, rook_from: 56, rook_to: 59 },
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub fn between_squares(&self) -> impl Iterator<Item = Square> {
        let low = self.king_from.min(self.rook_from) + 1;
        let high = self.king_from.max(self.rook_from);
        low..high
    }

    /// Squares the king crosses or lands on, excluding its origin.
    pub fn king_path(&self) -> impl Iterator<Item = Square> {
        let (low, high) = if self.king_to > self.king_from {
            (self.king_from + 1, self.king_to)
        } else {
            (self.king_to, self.king_from - 1)
        };
        low..=high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_short_castle_squares() {
        let layout = CastlingLayout::for_side(Color::White, CastlingSide::Short);
        assert_eq!(layout.between_squares().collect::<Vec<_>>(), vec![5, 6]);
        assert_eq!(layout.king_path().collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn black_long_castle_squares() {
        let layout = CastlingLayout::for_side(Color::Black, CastlingSide::Long);
        assert_eq!(layout.between_squares().collect::<Vec<_>>(), vec![57, 58, 59]);
        assert_eq!(layout.king_path().collect::<Vec<_>>(), vec![58, 59]);
    }
}
