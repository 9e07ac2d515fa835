//! Primitive chess types shared by every engine subsystem.
//!
//! Squares are plain indices (`0 == a1`, `7 == h1`, `63 == h8`); files and
//! ranks are zero-based indices in `0..=7`.

use std::fmt;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Zero-based file index (`0 == a`).
pub type File = u8;

/// Zero-based rank index (`0 == 1`).
pub type Rank = u8;

#[inline]
pub const fn square_file(square: Square) -> File {
    square % 8
}

#[inline]
pub const fn square_rank(square: Square) -> Rank {
    square / 8
}

#[inline]
pub const fn square_from_file_rank(file: File, rank: Rank) -> Square {
    rank * 8 + file
}

/// Offsets `square` by `(d_file, d_rank)`, returning `None` off the board.
#[inline]
pub fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    let file = square_file(square) as i8 + d_file;
    let rank = square_rank(square) as i8 + d_rank;
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }
    Some(square_from_file_rank(file as File, rank as Rank))
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> Rank {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> Rank {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Single-letter tag used by the ascii board, e.g. `P(w)`.
    #[inline]
    pub const fn tag(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind (color is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case notation letter (`P` for pawns, which notation never writes).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Kind named by a notation piece letter. Pawns have no letter.
    #[inline]
    pub const fn from_notation_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Castling wing named by `o-o` (short) and `o-o-o` (long).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Short,
    Long,
}

impl fmt::Display for CastlingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastlingSide::Short => f.write_str("o-o"),
            CastlingSide::Long => f.write_str("o-o-o"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_layout() {
        assert_eq!(square_from_file_rank(0, 0), 0);
        assert_eq!(square_from_file_rank(7, 7), 63);
        assert_eq!(square_file(28), 4);
        assert_eq!(square_rank(28), 3);
    }

    #[test]
    fn offset_square_stays_on_board() {
        assert_eq!(offset_square(0, -1, 0), None);
        assert_eq!(offset_square(63, 0, 1), None);
        assert_eq!(offset_square(1, 1, 2), Some(18));
    }

    #[test]
    fn pawn_geometry_per_color() {
        assert_eq!(Color::White.pawn_direction(), 1);
        assert_eq!(Color::Black.pawn_direction(), -1);
        assert_eq!(Color::White.pawn_start_rank(), 1);
        assert_eq!(Color::Black.pawn_start_rank(), 6);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn notation_letters() {
        assert_eq!(PieceKind::from_notation_letter('N'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_notation_letter('P'), None);
        assert_eq!(PieceKind::Queen.letter(), 'Q');
    }
}
