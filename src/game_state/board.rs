//! 64-square occupancy map.

use crate::game_state::chess_types::*;

/// Contents of one square; `None` is an empty square.
pub type Occupant = Option<Piece>;

/// Total mapping from every square to its occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Occupant; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { squares: [None; 64] }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn at(&self, square: Square) -> Occupant {
        self.squares[square as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, occupant: Occupant) {
        self.squares[square as usize] = occupant;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.at(square).is_none()
    }

    /// Piece on `square` if it belongs to `color`.
    #[inline]
    pub fn piece_of_color(&self, square: Square, color: Color) -> Option<Piece> {
        self.at(square).filter(|piece| piece.color == color)
    }

    /// Iterates `(square, piece)` over every occupied square, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(square, occupant)| occupant.map(|piece| (square as Square, piece)))
    }
}
