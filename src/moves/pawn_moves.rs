//! Pawn capture tables.
//!
//! A pawn attacks its two forward diagonals whether or not anything stands
//! there, which is what check detection needs.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::attack_set::{bit_if_on_board, AttackSet};

pub const WHITE_PAWN_ATTACKS: [AttackSet; 64] = generate_pawn_attacks(Color::White);
pub const BLACK_PAWN_ATTACKS: [AttackSet; 64] = generate_pawn_attacks(Color::Black);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> AttackSet {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(color: Color) -> [AttackSet; 64] {
    let mut table = [AttackSet::empty(); 64];
    let forward = color.pawn_direction() as i32;
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let attacks =
            bit_if_on_board(row + forward, col - 1) | bit_if_on_board(row + forward, col + 1);
        table[sq] = AttackSet::from_bits(attacks);
        sq += 1;
    }

    table
}
