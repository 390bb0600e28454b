//! Pawn pseudo-legal targets: pushes, captures and en passant.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_enemy_on;

pub fn generate_pawn_moves(board_state: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    let board = &board_state.board;
    let forward = color.pawn_direction();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if is_enemy_on(board, to, color) {
            out.push(to);
        }
    }

    if let Some(target) = board_state.en_passant_target {
        let diagonal_ahead = target.row() as i8 == from.row() as i8 + forward
            && (target.col() as i8 - from.col() as i8).abs() == 1;
        if diagonal_ahead && board.is_empty(target) {
            out.push(target);
        }
    }
}
