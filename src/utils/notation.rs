//! Short algebraic notation for applied moves.
//!
//! Deliberately minimal: no disambiguation between two pieces that can reach
//! the same square, and no check or mate suffixes.

use crate::game_state::chess_types::*;

pub fn move_notation(
    piece: Piece,
    from: Square,
    to: Square,
    is_capture: bool,
    castle: Option<CastleSide>,
    promotion: Option<PieceKind>,
) -> String {
    if let Some(side) = castle {
        return side.notation().to_owned();
    }

    let mut out = String::with_capacity(8);
    match piece.kind {
        PieceKind::Pawn => {
            if is_capture {
                out.push(from.file_char());
                out.push('x');
            }
        }
        kind => {
            out.push(kind.letter());
            if is_capture {
                out.push('x');
            }
        }
    }
    out.push_str(&to.to_string());

    if let Some(kind) = promotion {
        out.push('=');
        out.push(kind.letter());
    }

    out
}
