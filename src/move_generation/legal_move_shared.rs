//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::board_state::Board;
use crate::game_state::chess_types::*;

/// True when `square` holds a piece of the other color.
#[inline]
pub fn is_enemy_on(board: &Board, square: Square, color: Color) -> bool {
    matches!(board.piece_at(square), Some(piece) if piece.color != color)
}

/// Empty or enemy-occupied.
#[inline]
pub fn is_available(board: &Board, square: Square, color: Color) -> bool {
    match board.piece_at(square) {
        None => true,
        Some(piece) => piece.color != color,
    }
}

/// Fixed-offset targets (knight, king) in offset order.
pub fn push_offset_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if is_available(board, to, color) {
                out.push(to);
            }
        }
    }
}

/// Ray-cast targets: empty squares, then the first enemy; friends stop the ray.
pub fn push_sliding_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}
