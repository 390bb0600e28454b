//! Terminal-oriented Unicode board renderer.
//!
//! Draws a position with file and rank labels, White at the bottom unless
//! `flipped` is set.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_board_state(board_state: &BoardState, flipped: bool) -> String {
    let mut out = String::new();

    let rows: Vec<u8> = if flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };
    let cols = rows.clone();

    push_file_labels(&mut out, &cols);
    out.push('\n');

    for &row in &rows {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for (i, &col) in cols.iter().enumerate() {
            match board_state.piece_at(Square::at(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if i < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    push_file_labels(&mut out, &cols);

    out
}

fn push_file_labels(out: &mut String, cols: &[u8]) {
    out.push(' ');
    for &col in cols {
        out.push(' ');
        out.push(char::from(b'a' + col));
    }
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
