//! Knight attack tables.

use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Square;
use crate::moves::attack_set::{bit_if_on_board, AttackSet};

pub const KNIGHT_ATTACKS: [AttackSet; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> AttackSet {
    KNIGHT_ATTACKS[square.index()]
}

const fn generate_knight_attacks() -> [AttackSet; 64] {
    let mut table = [AttackSet::empty(); 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < KNIGHT_OFFSETS.len() {
            let (d_row, d_col) = KNIGHT_OFFSETS[i];
            attacks |= bit_if_on_board(row + d_row as i32, col + d_col as i32);
            i += 1;
        }

        table[sq] = AttackSet::from_bits(attacks);
        sq += 1;
    }

    table
}
