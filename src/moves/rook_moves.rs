//! Rook attacks and the shared ray walker used by all sliding pieces.

use crate::game_state::board_state::Board;
use crate::game_state::chess_rules::ORTHOGONAL_DIRECTIONS;
use crate::game_state::chess_types::Square;
use crate::moves::attack_set::AttackSet;

#[inline]
pub fn rook_attacks(board: &Board, square: Square) -> AttackSet {
    ray_attacks(board, square, &ORTHOGONAL_DIRECTIONS)
}

/// Squares reached along each direction up to and including the first
/// occupied square.
pub fn ray_attacks(board: &Board, square: Square, directions: &[(i8, i8)]) -> AttackSet {
    let mut attacks = AttackSet::empty();
    for &(d_row, d_col) in directions {
        let mut cursor = square.offset(d_row, d_col);
        while let Some(target) = cursor {
            attacks.insert(target);
            if !board.is_empty(target) {
                break;
            }
            cursor = target.offset(d_row, d_col);
        }
    }
    attacks
}
