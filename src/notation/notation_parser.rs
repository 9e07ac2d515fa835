//! Abbreviated algebraic notation parser.
//!
//! Pure syntax: classifies a raw move string into a [`MoveDescriptor`]
//! without looking at the board. Accepted shapes:
//!
//! - pawn advance `e4`
//! - pawn capture `dxe5`
//! - piece move `Nc3`, `Nbd2`, `N1f3`, `Nxe5`, `Nbxd2`
//! - castling `o-o` and `o-o-o`

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Disambiguator, MoveDescriptor, MoveMover, PieceMove};
use crate::utils::algebraic::{algebraic_to_square, file_from_char, rank_from_char};

pub fn parse_move(raw: &str) -> Result<MoveDescriptor, NotationError> {
    let chars: Vec<char> = raw.chars().collect();
    let Some(&first) = chars.first() else {
        return Err(NotationError::Empty);
    };

    if first == 'o' {
        return parse_castle(raw);
    }
    if let Some(file) = file_from_char(first) {
        return parse_pawn_move(raw, &chars, file);
    }
    if let Some(kind) = PieceKind::from_notation_letter(first) {
        return parse_piece_move(raw, &chars, kind);
    }
    Err(NotationError::LeadingChar(first))
}

fn parse_castle(raw: &str) -> Result<MoveDescriptor, NotationError> {
    match raw {
        "o-o" => Ok(MoveDescriptor::Castle(CastlingSide::Short)),
        "o-o-o" => Ok(MoveDescriptor::Castle(CastlingSide::Long)),
        _ => Err(NotationError::Castling(raw.to_owned())),
    }
}

fn parse_pawn_move(raw: &str, chars: &[char], file: File) -> Result<MoveDescriptor, NotationError> {
    match chars.len() {
        2 => Ok(MoveDescriptor::Regular(PieceMove {
            mover: MoveMover::Pawn { from_file: None },
            is_capture: false,
            disambiguator: None,
            target: parse_target(&chars[0..2])?,
        })),
        4 => {
            expect_capture_mark(raw, chars, 1)?;
            Ok(MoveDescriptor::Regular(PieceMove {
                mover: MoveMover::Pawn { from_file: Some(file) },
                is_capture: true,
                disambiguator: None,
                target: parse_target(&chars[2..4])?,
            }))
        }
        _ => Err(NotationError::Length { raw: raw.to_owned(), category: "pawn move" }),
    }
}

fn parse_piece_move(raw: &str, chars: &[char], kind: PieceKind) -> Result<MoveDescriptor, NotationError> {
    let (disambiguator, is_capture) = match chars.len() {
        3 => (None, false),
        4 if chars[1] == 'x' => (None, true),
        4 => (Some(parse_disambiguator(raw, chars[1])?), false),
        5 => {
            let disambiguator = parse_disambiguator(raw, chars[1])?;
            expect_capture_mark(raw, chars, 2)?;
            (Some(disambiguator), true)
        }
        _ => return Err(NotationError::Length { raw: raw.to_owned(), category: "piece move" }),
    };

    let target = parse_target(&chars[chars.len() - 2..])?;
    Ok(MoveDescriptor::Regular(PieceMove { mover: MoveMover::Piece(kind), is_capture, disambiguator, target }))
}

fn parse_disambiguator(raw: &str, ch: char) -> Result<Disambiguator, NotationError> {
    if let Some(file) = file_from_char(ch) {
        return Ok(Disambiguator::File(file));
    }
    if let Some(rank) = rank_from_char(ch) {
        return Ok(Disambiguator::Rank(rank));
    }
    Err(NotationError::Modifier { raw: raw.to_owned(), found: ch, position: 1 })
}

fn expect_capture_mark(raw: &str, chars: &[char], position: usize) -> Result<(), NotationError> {
    if chars[position] == 'x' {
        return Ok(());
    }
    Err(NotationError::Modifier { raw: raw.to_owned(), found: chars[position], position })
}

fn parse_target(chars: &[char]) -> Result<Square, NotationError> {
    let square: String = chars.iter().collect();
    algebraic_to_square(&square).map_err(|_| NotationError::Square(square))
}
