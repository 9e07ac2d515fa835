//! Terminal-oriented board renderer.
//!
//! Draws the board from White's side, rank 8 at the top, either with Unicode
//! glyphs or with the plain `P(w)` / `None` cells.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::session::session_config::BoardStyle;

pub fn render_game_state(game_state: &GameState, style: BoardStyle) -> String {
    match style {
        BoardStyle::Unicode => render_unicode(game_state),
        BoardStyle::Ascii => render_ascii(game_state),
    }
}

fn render_unicode(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.board.at(square_from_file_rank(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn render_ascii(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push_str("  ");
        for file in 0..8u8 {
            match game_state.board.at(square_from_file_rank(file, rank)) {
                Some(piece) => out.push_str(&format!("{}({}) ", piece.kind.letter(), piece.color.tag())),
                None => out.push_str("None "),
            }
        }
        out.push('\n');
    }

    out.push_str("  ");
    for file in 'a'..='h' {
        out.push_str(&format!("  {file}  "));
    }
    out.push('\n');
    out.push_str(&"-".repeat(5 * 8 + 4));

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_board_has_labels_and_pieces() {
        let rendered = render_game_state(&GameState::new_game(), BoardStyle::Unicode);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn ascii_board_uses_piece_color_cells() {
        let rendered = render_game_state(&GameState::new_game(), BoardStyle::Ascii);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "8  R(b) N(b) B(b) Q(b) K(b) B(b) N(b) R(b) ");
        assert_eq!(lines[3], "5  None None None None None None None None ");
        assert_eq!(lines[7], "1  R(w) N(w) B(w) Q(w) K(w) B(w) N(w) R(w) ");
        assert_eq!(lines[9], "-".repeat(44));
    }
}
