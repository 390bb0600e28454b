//! Perft: exhaustive legal-move tree counts for validating the generator.
//!
//! Each pawn move onto its last row is expanded into the four promotion
//! choices so totals line up with the published reference numbers.

use crate::errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};

/// Leaf statistics; everything except `nodes` describes the final ply's moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board_state: &BoardState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut scratch = board_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, depth, &mut total)?;
    Ok(total)
}

/// Node count only.
pub fn perft_nodes(board_state: &BoardState, depth: u8) -> ChessResult<u64> {
    Ok(perft(board_state, depth)?.nodes)
}

fn perft_recurse(scratch: &mut BoardState, depth: u8, total: &mut PerftCounts) -> ChessResult<()> {
    for (from, to) in all_legal_moves(scratch) {
        for promotion in promotion_choices(scratch, from, to) {
            let record = make_move(scratch, from, to, promotion)?;

            if depth == 1 {
                let mut leaf = PerftCounts {
                    nodes: 1,
                    ..PerftCounts::default()
                };
                leaf.captures = u64::from(record.is_capture());
                leaf.en_passant = u64::from(record.en_passant_capture.is_some());
                leaf.castles = u64::from(record.rook_relocation.is_some());
                leaf.promotions = u64::from(record.promotion.is_some());
                if is_king_in_check(scratch, scratch.side_to_move) {
                    leaf.checks = 1;
                    leaf.checkmates = u64::from(!has_any_legal_move(scratch));
                }
                total.merge(leaf);
            } else {
                perft_recurse(scratch, depth - 1, total)?;
            }

            unmake_move(scratch, &record);
        }
    }
    Ok(())
}

fn promotion_choices(board_state: &BoardState, from: Square, to: Square) -> Vec<Option<PieceKind>> {
    match board_state.piece_at(from) {
        Some(piece) if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() => {
            PieceKind::PROMOTIONS.iter().copied().map(Some).collect()
        }
        _ => vec![None],
    }
}
