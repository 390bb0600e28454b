//! Bishop attacks.

use crate::game_state::board_state::Board;
use crate::game_state::chess_rules::DIAGONAL_DIRECTIONS;
use crate::game_state::chess_types::Square;
use crate::moves::attack_set::AttackSet;
use crate::moves::rook_moves::ray_attacks;

#[inline]
pub fn bishop_attacks(board: &Board, square: Square) -> AttackSet {
    ray_attacks(board, square, &DIAGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::board_state::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn bishop_from_center_and_corner() {
        let board = Board::empty();
        assert_eq!(bishop_attacks(&board, Square::at(3, 3)).len(), 13);
        assert_eq!(bishop_attacks(&board, Square::at(0, 0)).len(), 7);
    }

    #[test]
    fn bishops_are_hemmed_in_at_the_start() {
        let board = Board::standard();
        let c1 = Square::at(7, 2);
        let targets: Vec<String> = bishop_attacks(&board, c1).iter().map(|s| s.to_string()).collect();
        assert_eq!(targets, vec!["b2", "d2"]);
    }
}
