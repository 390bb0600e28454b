//! King pseudo-legal targets, castling included.
//!
//! Castling is gated here on the rights flags, the king's own rook on its
//! corner and empty squares between the two. Whether the king starts in, passes through or lands on an
//! attacked square is decided by the legality filter.

use crate::game_state::board_state::{Board, BoardState};
use crate::game_state::chess_rules::{KING_HOME_COL, KING_OFFSETS};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_offset_targets;

pub fn generate_king_moves(board_state: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    let board = &board_state.board;
    push_offset_targets(board, from, color, &KING_OFFSETS, out);

    if from != Square::at(color.home_row(), KING_HOME_COL) {
        return;
    }

    let own_rook = Some(Piece::new(color, PieceKind::Rook));
    for side in CastleSide::ALL {
        let corner = Square::at(from.row(), side.rook_home_col());
        if board_state.castling_rights.allows(color, side)
            && board.piece_at(corner) == own_rook
            && castle_path_clear(board, from, side)
        {
            out.push(Square::at(from.row(), side.king_target_col()));
        }
    }
}

/// Every square strictly between the king and its rook's home corner is empty.
pub fn castle_path_clear(board: &Board, king_from: Square, side: CastleSide) -> bool {
    let rook_col = side.rook_home_col();
    let (low, high) = if rook_col > king_from.col() {
        (king_from.col() + 1, rook_col)
    } else {
        (rook_col + 1, king_from.col())
    };
    (low..high).all(|col| board.is_empty(Square::at(king_from.row(), col)))
}

/// Castle wing of a king move spanning two columns, if it is one.
pub fn castle_side_of(piece: Piece, from: Square, to: Square) -> Option<CastleSide> {
    if piece.kind != PieceKind::King || from.row() != to.row() {
        return None;
    }
    match to.col() as i8 - from.col() as i8 {
        2 => Some(CastleSide::Kingside),
        -2 => Some(CastleSide::Queenside),
        _ => None,
    }
}
