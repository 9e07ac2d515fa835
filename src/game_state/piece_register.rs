//! Per-color, per-kind record of where live pieces stand.
//!
//! Captured pieces stay in their list so indices never shift; their slot is
//! set to `None` and every query skips it.

use crate::chess_errors::MoveError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceRegister {
    records: [[Vec<Option<Square>>; 6]; 2],
}

impl PieceRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a register that mirrors `board`, scanning from a1 upward.
    pub fn from_board(board: &Board) -> Self {
        let mut register = Self::new();
        for (square, piece) in board.occupied() {
            register.add_piece_record(piece, square);
        }
        register
    }

    pub fn add_piece_record(&mut self, piece: Piece, square: Square) {
        self.records[piece.color.index()][piece.kind.index()].push(Some(square));
    }

    /// Squares of live pieces of one kind and color, in registration order.
    pub fn live_squares(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        self.records[color.index()][kind.index()].iter().flatten().copied()
    }

    /// Every slot for one kind and color, including captured (`None`) ones.
    pub fn slots(&self, color: Color, kind: PieceKind) -> &[Option<Square>] {
        &self.records[color.index()][kind.index()]
    }

    /// Live pieces of `color` as `(square, kind)` pairs.
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        ALL_PIECE_KINDS
            .into_iter()
            .flat_map(move |kind| self.live_squares(color, kind).map(move |square| (square, kind)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.live_squares(color, PieceKind::King).next()
    }

    #[inline]
    pub fn contains_live(&self, piece: Piece, square: Square) -> bool {
        self.live_squares(piece.color, piece.kind).any(|live| live == square)
    }

    pub fn relocate(&mut self, piece: Piece, from: Square, to: Square) -> Result<(), MoveError> {
        let slot = self.live_slot_mut(piece, from)?;
        *slot = Some(to);
        Ok(())
    }

    /// Marks the piece on `square` as captured; its slot is kept.
    pub fn mark_captured(&mut self, piece: Piece, square: Square) -> Result<(), MoveError> {
        let slot = self.live_slot_mut(piece, square)?;
        *slot = None;
        Ok(())
    }

    fn live_slot_mut(&mut self, piece: Piece, square: Square) -> Result<&mut Option<Square>, MoveError> {
        self.records[piece.color.index()][piece.kind.index()]
            .iter_mut()
            .find(|slot| **slot == Some(square))
            .ok_or(MoveError::RegisterOutOfSync { piece, square })
    }

    /// Checks that every live record matches the board and that every
    /// occupied square has exactly one live record.
    pub fn is_consistent_with(&self, board: &Board) -> bool {
        let mut seen = [false; 64];
        for color in [Color::White, Color::Black] {
            for (square, kind) in self.live_pieces(color) {
                if seen[square as usize] || board.at(square) != Some(Piece::new(kind, color)) {
                    return false;
                }
                seen[square as usize] = true;
            }
        }
        board.occupied().all(|(square, _)| seen[square as usize])
    }
}
