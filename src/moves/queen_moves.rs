//! Queen attacks: the union of bishop and rook rays.

use crate::game_state::board_state::Board;
use crate::game_state::chess_types::Square;
use crate::moves::attack_set::AttackSet;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(board: &Board, square: Square) -> AttackSet {
    bishop_attacks(board, square) | rook_attacks(board, square)
}
