//! Piece-placement parser and generator.
//!
//! Reads and writes the board field of a FEN string. Side to move, castling
//! and clocks are not engine state here, so only the placement is handled.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn parse_placement(placement: &str) -> Result<GameState, String> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err("Placement must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as Rank;
        let mut file: File = 0;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as File;
                if file > 8 {
                    return Err(format!("Rank {} has too many files", rank + 1));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in placement"))?;

            if file >= 8 {
                return Err(format!("Rank {} has too many files", rank + 1));
            }

            board.set(square_from_file_rank(file, rank), Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(format!("Rank {} does not sum to 8 files", rank + 1));
        }
    }

    Ok(GameState::from_board(board))
}

pub fn generate_placement(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.board.at(square_from_file_rank(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

fn piece_to_fen_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_placement, parse_placement};

    #[test]
    fn sparse_placement_round_trips() {
        let placement = "4k3/8/8/3p4/8/2N5/8/R3K2R";
        let game_state = parse_placement(placement).expect("placement should parse");
        assert!(game_state.is_consistent());
        assert_eq!(game_state.board.occupied().count(), 6);
        assert_eq!(generate_placement(&game_state), placement);
    }

    #[test]
    fn malformed_placements_are_rejected() {
        assert!(parse_placement("8/8/8").is_err());
        assert!(parse_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("8/8/8/8/8/8/8/7X").is_err());
        assert!(parse_placement("8/8/8/8/8/8/8/5ppppp").is_err());
    }
}
