//! Attack analysis: which squares a side attacks, and whether a king is in check.
//!
//! The attack set is rebuilt from scratch on every query.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::moves::attack_set::AttackSet;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Every square attacked by a piece of `color`.
pub fn squares_attacked_by(board_state: &BoardState, color: Color) -> AttackSet {
    let board = &board_state.board;
    let mut attacks = AttackSet::empty();

    for (from, piece) in board.pieces_of(color) {
        attacks |= match piece.kind {
            PieceKind::Pawn => pawn_attacks(color, from),
            PieceKind::Knight => knight_attacks(from),
            PieceKind::Bishop => bishop_attacks(board, from),
            PieceKind::Rook => rook_attacks(board, from),
            PieceKind::Queen => queen_attacks(board, from),
            PieceKind::King => king_attacks(from),
        };
    }

    attacks
}

#[inline]
pub fn is_square_attacked(board_state: &BoardState, square: Square, attacker_color: Color) -> bool {
    squares_attacked_by(board_state, attacker_color).contains(square)
}

#[inline]
pub fn king_square(board_state: &BoardState, color: Color) -> Option<Square> {
    board_state.board.find_king(color)
}

/// A missing king is never in check.
pub fn is_king_in_check(board_state: &BoardState, color: Color) -> bool {
    let Some(king_sq) = king_square(board_state, color) else {
        return false;
    };
    is_square_attacked(board_state, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn start_position_attack_sets() {
        let state = BoardState::new_game();
        let white = squares_attacked_by(&state, Color::White);
        // Rows 5 (rank 3) fully covered by pawns; knights add nothing new there.
        for col in 0..8 {
            assert!(white.contains(Square::at(5, col)));
        }
        assert!(!white.contains(sq("e4")));
        assert!(!is_king_in_check(&state, Color::White));
        assert!(!is_king_in_check(&state, Color::Black));
    }

    #[test]
    fn pawn_attacks_ignore_occupancy() {
        let state = BoardState::from_fen("8/8/8/8/8/3p4/4P3/8 w - - 0 1").expect("FEN should parse");
        let white = squares_attacked_by(&state, Color::White);
        assert!(white.contains(sq("d3")));
        assert!(white.contains(sq("f3")));
        assert!(!white.contains(sq("e3")));
    }

    #[test]
    fn slider_check_is_blocked_by_interposed_piece() {
        let open = BoardState::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&open, Color::Black));

        let blocked =
            BoardState::from_fen("4k3/4n3/8/8/8/8/8/4R1K1 b - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&blocked, Color::Black));
        assert!(is_square_attacked(&blocked, sq("e7"), Color::White));
    }

    #[test]
    fn missing_king_reports_no_check() {
        let state = BoardState::from_fen("8/8/8/8/8/8/8/R6K b - - 0 1").expect("FEN should parse");
        assert_eq!(king_square(&state, Color::Black), None);
        assert!(!is_king_in_check(&state, Color::Black));
    }
}
