//! Parsed shape of one notation move.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::{file_to_char, rank_to_char, square_to_algebraic};

/// Extra origin hint written between the piece letter and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disambiguator {
    File(File),
    Rank(Rank),
}

impl Disambiguator {
    #[inline]
    pub fn matches(self, origin: Square) -> bool {
        match self {
            Disambiguator::File(file) => square_file(origin) == file,
            Disambiguator::Rank(rank) => square_rank(origin) == rank,
        }
    }
}

impl fmt::Display for Disambiguator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disambiguator::File(file) => write!(f, "{}", file_to_char(*file)),
            Disambiguator::Rank(rank) => write!(f, "{}", rank_to_char(*rank)),
        }
    }
}

/// Which pieces a move asks to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMover {
    /// Pawn move; `from_file` is set for captures (`dxe5` moves from the d-file).
    Pawn { from_file: Option<File> },
    /// Lettered piece: knight, bishop, rook, queen or king.
    Piece(PieceKind),
}

impl MoveMover {
    #[inline]
    pub fn kind(self) -> PieceKind {
        match self {
            MoveMover::Pawn { .. } => PieceKind::Pawn,
            MoveMover::Piece(kind) => kind,
        }
    }
}

/// Any move other than castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMove {
    pub mover: MoveMover,
    pub is_capture: bool,
    pub disambiguator: Option<Disambiguator>,
    pub target: Square,
}

impl PieceMove {
    /// Same move with the capture mark set or cleared; used for hints.
    #[inline]
    pub fn with_capture(self, is_capture: bool) -> Self {
        Self { is_capture, ..self }
    }

    #[inline]
    pub fn accepts_origin(&self, origin: Square) -> bool {
        self.disambiguator.map_or(true, |disambiguator| disambiguator.matches(origin))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDescriptor {
    Regular(PieceMove),
    Castle(CastlingSide),
}

/// Writes the move back out in the notation the parser accepts.
impl fmt::Display for PieceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mover {
            MoveMover::Pawn { from_file: Some(file) } => write!(f, "{}", file_to_char(file))?,
            MoveMover::Pawn { from_file: None } => {}
            MoveMover::Piece(kind) => write!(f, "{}", kind.letter())?,
        }
        if let Some(disambiguator) = self.disambiguator {
            write!(f, "{disambiguator}")?;
        }
        if self.is_capture {
            f.write_str("x")?;
        }
        f.write_str(&square_to_algebraic(self.target))
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDescriptor::Regular(piece_move) => write!(f, "{piece_move}"),
            MoveDescriptor::Castle(side) => write!(f, "{side}"),
        }
    }
}
