//! Square sets packed one bit per square.
//!
//! Bit `n` stands for `Square::from_index(n)`, i.e. board scan order with a8
//! as bit 0. Iteration therefore also follows scan order.

use std::ops::{BitOr, BitOrAssign};

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct AttackSet(u64);

impl AttackSet {
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1u64 << square.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Square::from_index(index))
        })
    }
}

impl BitOr for AttackSet {
    type Output = AttackSet;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        AttackSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for AttackSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for AttackSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut set = AttackSet::empty();
        for square in iter {
            set.insert(square);
        }
        set
    }
}

/// Table-building helper: the bit for `(row, col)` or nothing when off board.
pub(crate) const fn bit_if_on_board(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }
    1u64 << ((row as usize) * 8 + col as usize)
}
