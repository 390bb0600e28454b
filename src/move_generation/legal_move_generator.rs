//! Full legal move generation pipeline.
//!
//! Collects piece-wise pseudo-legal targets, then plays each candidate on a
//! scratch copy of the position, keeps it if the mover's king is safe, and
//! takes it back before trying the next one. The caller's position is never
//! touched.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, squares_attacked_by};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{castle_side_of, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Destinations allowed by the piece's movement rules, ignoring king safety.
pub fn pseudo_legal_moves_for(board_state: &BoardState, from: Square) -> Vec<Square> {
    let Some(piece) = board_state.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board_state, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board_state, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board_state, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board_state, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board_state, from, piece.color, &mut out),
        PieceKind::King => generate_king_moves(board_state, from, piece.color, &mut out),
    }
    out
}

/// Pseudo-legal destinations that leave the mover's king safe.
pub fn legal_moves_for(board_state: &BoardState, from: Square) -> Vec<Square> {
    let Some(piece) = board_state.piece_at(from) else {
        return Vec::new();
    };

    let mut scratch = board_state.clone();
    pseudo_legal_moves_for(board_state, from)
        .into_iter()
        .filter(|&to| is_legal_on_scratch(&mut scratch, piece, from, to))
        .collect()
}

/// Every legal `(from, to)` pair of the side to move, in board scan order.
pub fn all_legal_moves(board_state: &BoardState) -> Vec<(Square, Square)> {
    let side = board_state.side_to_move;
    board_state
        .board
        .pieces_of(side)
        .flat_map(|(from, _)| {
            legal_moves_for(board_state, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Stops at the first piece of the side to move that has somewhere to go.
pub fn has_any_legal_move(board_state: &BoardState) -> bool {
    let side = board_state.side_to_move;
    board_state
        .board
        .pieces_of(side)
        .any(|(from, _)| !legal_moves_for(board_state, from).is_empty())
}

fn is_legal_on_scratch(scratch: &mut BoardState, piece: Piece, from: Square, to: Square) -> bool {
    if let Some(side) = castle_side_of(piece, from, to) {
        // No castling out of or through check.
        let enemy_attacks = squares_attacked_by(scratch, piece.color.opposite());
        if enemy_attacks.contains(from) {
            return false;
        }
        let transit = [
            from.offset(0, side.direction()),
            from.offset(0, 2 * side.direction()),
        ];
        if transit.into_iter().flatten().any(|sq| enemy_attacks.contains(sq)) {
            return false;
        }
    }

    // Any promotion guards the king equally well; test with a queen.
    let Ok(record) = make_move(scratch, from, to, Some(PieceKind::Queen)) else {
        return false;
    };
    let king_safe = !is_king_in_check(scratch, piece.color);
    unmake_move(scratch, &record);
    king_safe
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn names(squares: &[Square]) -> Vec<String> {
        squares.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let state = BoardState::new_game();
        assert_eq!(all_legal_moves(&state).len(), 20);
        assert!(has_any_legal_move(&state));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let state =
            BoardState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(pseudo_legal_moves_for(&state, sq("e2")).len(), 6);
        assert!(legal_moves_for(&state, sq("e2")).is_empty());
    }

    #[test]
    fn castling_through_an_attacked_square_is_rejected() {
        let state =
            BoardState::from_fen("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let king = legal_moves_for(&state, sq("e1"));
        assert!(!king.contains(&sq("g1")));
        assert!(king.contains(&sq("c1")));
        assert!(!king.contains(&sq("f1")));
    }

    #[test]
    fn castling_out_of_check_is_rejected() {
        let state =
            BoardState::from_fen("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let king = legal_moves_for(&state, sq("e1"));
        assert!(!king.contains(&sq("g1")));
        assert!(!king.contains(&sq("c1")));
        assert_eq!(names(&king), vec!["d2", "f2", "d1", "f1"]);
    }

    #[test]
    fn queenside_castle_allowed_when_only_b_file_is_attacked() {
        let state =
            BoardState::from_fen("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        assert!(legal_moves_for(&state, sq("e1")).contains(&sq("c1")));
    }

    #[test]
    fn legal_query_does_not_disturb_the_position() {
        let state = BoardState::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1")
            .expect("FEN should parse");
        let before = state.clone();
        let _ = all_legal_moves(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn king_cannot_step_into_pawn_attack() {
        let state = BoardState::from_fen("8/8/8/8/3p4/8/4K3/7k w - - 0 1").expect("FEN should parse");
        let king = legal_moves_for(&state, sq("e2"));
        assert!(!king.contains(&sq("e3")));
        assert!(!king.contains(&sq("c3")));
        assert!(king.contains(&sq("d3")));
    }
}
