//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices, and classifies single file/rank characters for the
//! notation parser.

use crate::game_state::chess_types::*;

#[inline]
pub fn file_from_char(ch: char) -> Option<File> {
    ('a'..='h').contains(&ch).then(|| ch as u8 - b'a')
}

#[inline]
pub fn rank_from_char(ch: char) -> Option<Rank> {
    ('1'..='8').contains(&ch).then(|| ch as u8 - b'1')
}

#[inline]
pub fn file_to_char(file: File) -> char {
    char::from(b'a' + file)
}

#[inline]
pub fn rank_to_char(rank: Rank) -> char {
    char::from(b'1' + rank)
}

/// Convert algebraic notation (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(format!("Invalid algebraic square: {square}"));
    };

    let file = file_from_char(file).ok_or_else(|| format!("Invalid algebraic file: {file}"))?;
    let rank = rank_from_char(rank).ok_or_else(|| format!("Invalid algebraic rank: {rank}"))?;
    Ok(square_from_file_rank(file, rank))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");
    format!("{}{}", file_to_char(square_file(square)), rank_to_char(square_rank(square)))
}
