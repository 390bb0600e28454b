//! King attack tables.

use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::Square;
use crate::moves::attack_set::{bit_if_on_board, AttackSet};

pub const KING_ATTACKS: [AttackSet; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> AttackSet {
    KING_ATTACKS[square.index()]
}

const fn generate_king_attacks() -> [AttackSet; 64] {
    let mut table = [AttackSet::empty(); 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < KING_OFFSETS.len() {
            let (d_row, d_col) = KING_OFFSETS[i];
            attacks |= bit_if_on_board(row + d_row as i32, col + d_col as i32);
            i += 1;
        }

        table[sq] = AttackSet::from_bits(attacks);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(king_attacks(Square::at(7, 0)).len(), 3);
        assert_eq!(king_attacks(Square::at(3, 3)).len(), 8);
    }
}
