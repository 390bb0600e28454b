//! Move execution and reversal.
//!
//! `make_move` mutates a position in place and hands back the record needed
//! to restore it; `unmake_move` consumes that record's snapshots. Neither
//! checks legality: callers only pass destinations produced by the legal
//! move generator.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::{MoveRecord, RookRelocation};
use crate::move_generation::legal_moves_king::castle_side_of;
use crate::utils::notation::move_notation;

/// Applies `from -> to` and returns its record.
///
/// `promotion` only matters for a pawn reaching its last row; a missing or
/// unusable choice (pawn, king) promotes to a queen.
pub fn make_move(
    board_state: &mut BoardState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<MoveRecord> {
    let piece = board_state
        .board
        .piece_at(from)
        .ok_or(ChessError::IllegalMove { from, to })?;
    let color = piece.color;

    let prev_en_passant_target = board_state.en_passant_target;
    let prev_castling_rights = board_state.castling_rights;
    let prev_halfmove_clock = board_state.halfmove_clock;
    let prev_fullmove_number = board_state.fullmove_number;

    let board = &mut board_state.board;
    let captured = board.piece_at(to);

    // En passant: the passed pawn sits one row behind the destination.
    let mut en_passant_capture = None;
    if piece.kind == PieceKind::Pawn && captured.is_none() && prev_en_passant_target == Some(to) {
        if let Some(passed_sq) = to.offset(-color.pawn_direction(), 0) {
            if board.piece_at(passed_sq) == Some(Piece::new(color.opposite(), PieceKind::Pawn)) {
                en_passant_capture = board.take(passed_sq).map(|pawn| (passed_sq, pawn));
            }
        }
    }

    let castle = castle_side_of(piece, from, to);
    let rook_relocation = castle.map(|side| {
        let rook_from = Square::at(to.row(), side.rook_home_col());
        let rook_to = Square::at(to.row(), side.rook_castled_col());
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
        RookRelocation {
            from: rook_from,
            to: rook_to,
        }
    });

    let promotion = if piece.kind == PieceKind::Pawn && to.row() == color.promotion_row() {
        Some(
            promotion
                .filter(|kind| kind.is_promotion_target())
                .unwrap_or(PieceKind::Queen),
        )
    } else {
        None
    };

    board.take(from);
    let landed = promotion.map_or(piece, |kind| Piece::new(color, kind));
    board.put(to, landed);

    board_state.en_passant_target =
        if piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Square::new((from.row() + to.row()) / 2, from.col())
        } else {
            None
        };

    update_castling_rights(board_state, piece, from, to, captured);

    let is_capture = captured.is_some() || en_passant_capture.is_some();
    if piece.kind == PieceKind::Pawn || is_capture {
        board_state.halfmove_clock = 0;
    } else {
        board_state.halfmove_clock = board_state.halfmove_clock.saturating_add(1);
    }
    if color == Color::Black {
        board_state.fullmove_number = board_state.fullmove_number.saturating_add(1);
    }
    board_state.side_to_move = color.opposite();

    Ok(MoveRecord {
        from,
        to,
        piece,
        captured,
        en_passant_capture,
        prev_en_passant_target,
        prev_castling_rights,
        prev_halfmove_clock,
        prev_fullmove_number,
        rook_relocation,
        notation: move_notation(piece, from, to, is_capture, castle, promotion),
        promotion,
        player: color,
    })
}

/// Reverses `record`, which must be the latest move made on `board_state`.
pub fn unmake_move(board_state: &mut BoardState, record: &MoveRecord) {
    let board = &mut board_state.board;

    board.set(record.to, record.captured);
    board.put(record.from, record.piece);

    if let Some((passed_sq, pawn)) = record.en_passant_capture {
        board.put(passed_sq, pawn);
    }

    if let Some(relocation) = record.rook_relocation {
        let rook = board.take(relocation.to);
        board.set(relocation.from, rook);
    }

    board_state.en_passant_target = record.prev_en_passant_target;
    board_state.castling_rights = record.prev_castling_rights;
    board_state.halfmove_clock = record.prev_halfmove_clock;
    board_state.fullmove_number = record.prev_fullmove_number;
    board_state.side_to_move = record.player;
}

fn update_castling_rights(
    board_state: &mut BoardState,
    moved: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
) {
    let rights = &mut board_state.castling_rights;

    match moved.kind {
        PieceKind::King => rights.revoke_all(moved.color),
        PieceKind::Rook => {
            if let Some(side) = CastleSide::from_rook_col(from.col()) {
                rights.revoke(moved.color, side);
            }
        }
        _ => {}
    }

    // Taking a rook on its home corner removes the owner's right on that wing.
    if let Some(victim) = captured.filter(|p| p.kind == PieceKind::Rook) {
        if let Some(side) = CastleSide::from_rook_col(to.col()) {
            if to.row() == victim.color.home_row() {
                rights.revoke(victim.color, side);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{make_move, unmake_move};
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_types::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn double_push_sets_en_passant_target_and_round_trips() {
        let mut state = BoardState::new_game();
        let before = state.clone();

        let record = make_move(&mut state, sq("e2"), sq("e4"), None).expect("e2e4 should apply");
        assert_eq!(state.en_passant_target, Some(sq("e3")));
        assert_eq!(state.side_to_move, Color::Black);
        assert_eq!(record.notation, "e4");

        unmake_move(&mut state, &record);
        assert_eq!(state, before);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut state =
            BoardState::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        let before = state.clone();

        let record = make_move(&mut state, sq("d4"), sq("e3"), None).expect("dxe3 should apply");
        assert_eq!(record.en_passant_capture, Some((sq("e4"), Piece::new(Color::White, PieceKind::Pawn))));
        assert_eq!(record.captured, None);
        assert!(state.board.is_empty(sq("e4")));
        assert_eq!(record.notation, "dxe3");

        unmake_move(&mut state, &record);
        assert_eq!(state, before);
    }

    #[test]
    fn castling_moves_the_rook_and_drops_rights() {
        let mut state =
            BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("FEN should parse");
        let before = state.clone();

        let record = make_move(&mut state, sq("e8"), sq("c8"), None).expect("O-O-O should apply");
        assert_eq!(record.notation, "O-O-O");
        assert_eq!(state.piece_at(sq("d8")), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert!(state.board.is_empty(sq("a8")));
        assert!(!state.castling_rights.allows(Color::Black, CastleSide::Kingside));
        assert!(state.castling_rights.allows(Color::White, CastleSide::Queenside));

        unmake_move(&mut state, &record);
        assert_eq!(state, before);
    }

    #[test]
    fn capturing_a_home_rook_revokes_the_victims_right() {
        let mut state =
            BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K1NR w KQkq - 0 1").expect("FEN should parse");
        state.board.put(sq("g6"), Piece::new(Color::White, PieceKind::Knight));
        let record = make_move(&mut state, sq("g6"), sq("h8"), None).expect("Nxh8 should apply");
        assert_eq!(record.notation, "Nxh8");
        assert!(!state.castling_rights.allows(Color::Black, CastleSide::Kingside));
        assert!(state.castling_rights.allows(Color::Black, CastleSide::Queenside));
        assert_eq!(state.halfmove_clock, 0);
    }

    #[test]
    fn promotion_defaults_to_queen_and_unmake_restores_the_pawn() {
        let mut state =
            BoardState::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = state.clone();

        let record = make_move(&mut state, sq("a7"), sq("b8"), Some(PieceKind::King)).expect("axb8 should apply");
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(record.notation, "axb8=Q");
        assert_eq!(state.piece_at(sq("b8")), Some(Piece::new(Color::White, PieceKind::Queen)));

        unmake_move(&mut state, &record);
        assert_eq!(state, before);

        let record = make_move(&mut state, sq("a7"), sq("a8"), Some(PieceKind::Knight)).expect("a8=N should apply");
        assert_eq!(record.notation, "a8=N");
    }

    #[test]
    fn empty_origin_is_rejected() {
        let mut state = BoardState::new_game();
        assert!(make_move(&mut state, sq("e4"), sq("e5"), None).is_err());
    }
}
