//! Queen pseudo-legal targets: diagonals first, then files and ranks.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_sliding_targets;

pub fn generate_queen_moves(board_state: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    push_sliding_targets(&board_state.board, from, color, &DIAGONAL_DIRECTIONS, out);
    push_sliding_targets(&board_state.board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
