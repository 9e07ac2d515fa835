//! Errors returned by the move pipeline.
//!
//! `MoveError` is the single error type the engine hands back to its caller.
//! Every variant except `RegisterOutOfSync` and `EmptyOrigin` describes
//! ordinary bad input: the caller reports the message and asks for another
//! move, and no state has been touched. Those two signal that the board and
//! the piece register disagree, which is a bug rather than a user mistake.

use std::fmt;

use thiserror::Error;

use crate::game_state::chess_types::{CastlingSide, Piece, Square};
use crate::utils::algebraic::square_to_algebraic;

/// Why a raw move string could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("no move entered")]
    Empty,

    /// First character is not a file, a piece letter or `o`.
    #[error("'{0}' cannot start a move; use a file a-h, a piece letter N B R Q K, or o-o")]
    LeadingChar(char),

    /// Length outside what the move's category allows.
    #[error("'{raw}' has the wrong length for a {category}")]
    Length { raw: String, category: &'static str },

    /// Destination is not a real square.
    #[error("'{0}' is not a square on the board")]
    Square(String),

    /// Bad character in the disambiguator or capture position.
    #[error("unexpected '{found}' at position {position} of '{raw}'")]
    Modifier { raw: String, found: char, position: usize },

    /// Starts with `o` but is neither `o-o` nor `o-o-o`.
    #[error("'{0}' is not a castling move; use o-o or o-o-o")]
    Castling(String),
}

/// Why a destination square is wrong for the requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalTargetReason {
    /// The mover's own piece stands there.
    OccupiedByFriendly(Piece),
    /// Marked as a capture, but nothing stands there.
    CaptureOfEmptySquare,
    /// An enemy piece stands there, but the move is not marked as a capture.
    MissingCaptureMark(Piece),
    /// Pawn advances need an empty square.
    PawnAdvanceBlocked(Piece),
    /// Pawns never move onto their own back rank.
    PawnBackRank,
}

impl fmt::Display for IllegalTargetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalTargetReason::OccupiedByFriendly(piece) => write!(f, "occupied by your own {}", piece.kind),
            IllegalTargetReason::CaptureOfEmptySquare => f.write_str("there is nothing to capture"),
            IllegalTargetReason::MissingCaptureMark(piece) => {
                write!(f, "occupied by a {piece}, captures need an 'x'")
            }
            IllegalTargetReason::PawnAdvanceBlocked(piece) => {
                write!(f, "occupied by a {piece}, pawns only capture diagonally")
            }
            IllegalTargetReason::PawnBackRank => f.write_str("pawns cannot move onto their own back rank"),
        }
    }
}

/// Why castling is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingObstacle {
    KingNotOnOrigin,
    RookNotOnOrigin,
    PathOccupied(Square),
    SquareAttacked(Square),
}

impl fmt::Display for CastlingObstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastlingObstacle::KingNotOnOrigin => f.write_str("the king is not on its starting square"),
            CastlingObstacle::RookNotOnOrigin => f.write_str("the rook is not on its starting square"),
            CastlingObstacle::PathOccupied(square) => {
                write!(f, "{} is occupied", square_to_algebraic(*square))
            }
            CastlingObstacle::SquareAttacked(square) => {
                write!(f, "{} is attacked", square_to_algebraic(*square))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("unreadable move: {0}")]
    Unreadable(#[from] NotationError),

    #[error("no {piece} can move to {}", algebraic(.target))]
    NoCandidate { piece: Piece, target: Square },

    #[error(
        "more than one {piece} can move to {} (from {}); add the origin file or rank",
        algebraic(.target),
        square_list(.candidates)
    )]
    Ambiguous { piece: Piece, target: Square, candidates: Vec<Square> },

    #[error(
        "{piece} on {} cannot reach {}: path blocked by a {blocker} on {}",
        algebraic(.origin),
        algebraic(.target),
        algebraic(.blocker_square)
    )]
    Blocked { piece: Piece, origin: Square, target: Square, blocker: Piece, blocker_square: Square },

    #[error("cannot move to {}: {reason}{}", algebraic(.target), suggestion_hint(.suggestion))]
    IllegalTarget { target: Square, reason: IllegalTargetReason, suggestion: Option<String> },

    #[error("cannot castle {side}: {reason}")]
    CastlingBlocked { side: CastlingSide, reason: CastlingObstacle },

    #[error("piece register has no live {piece} on {}", algebraic(.square))]
    RegisterOutOfSync { piece: Piece, square: Square },

    #[error("no piece stands on {}", algebraic(.0))]
    EmptyOrigin(Square),
}

fn algebraic(square: &Square) -> String {
    square_to_algebraic(*square)
}

fn square_list(squares: &[Square]) -> String {
    squares.iter().map(algebraic).collect::<Vec<_>>().join(", ")
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(notation) => format!("; did you mean {notation}?"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn messages_name_squares_and_pieces() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let err = MoveError::Ambiguous { piece: knight, target: 11, candidates: vec![1, 21] };
        assert_eq!(
            err.to_string(),
            "more than one white knight can move to d2 (from b1, f3); add the origin file or rank"
        );

        let err = MoveError::IllegalTarget {
            target: 36,
            reason: IllegalTargetReason::MissingCaptureMark(Piece::new(PieceKind::Pawn, Color::Black)),
            suggestion: Some("Nxe5".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "cannot move to e5: occupied by a black pawn, captures need an 'x'; did you mean Nxe5?"
        );
    }

    #[test]
    fn notation_errors_convert_to_unreadable() {
        let err: MoveError = NotationError::LeadingChar('z').into();
        assert!(matches!(err, MoveError::Unreadable(NotationError::LeadingChar('z'))));
    }
}
