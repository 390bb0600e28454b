//! Randomised checks of make/unmake symmetry and legal-move filtering over
//! positions reached by seeded random playouts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chess_rules_engine::game_state::board_state::BoardState;
use chess_rules_engine::game_state::chess_types::*;
use chess_rules_engine::move_generation::legal_move_apply::{make_move, unmake_move};
use chess_rules_engine::move_generation::legal_move_checks::{is_king_in_check, squares_attacked_by};
use chess_rules_engine::move_generation::legal_move_generator::{
    all_legal_moves, legal_moves_for, pseudo_legal_moves_for,
};
use chess_rules_engine::move_generation::legal_moves_king::castle_side_of;

const PLAYOUTS: u64 = 12;
const MAX_PLIES: usize = 80;

const START_FENS: [&str; 3] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
];

/// Visits every position of a seeded random game, stopping at game end.
fn for_each_playout_position(seed: u64, mut visit: impl FnMut(&BoardState)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let fen = START_FENS[(seed as usize) % START_FENS.len()];
    let mut state = BoardState::from_fen(fen).expect("playout FEN should parse");

    for _ in 0..MAX_PLIES {
        visit(&state);
        let moves = all_legal_moves(&state);
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[rng.random_range(0..moves.len())];
        let promotion = PieceKind::PROMOTIONS[rng.random_range(0..PieceKind::PROMOTIONS.len())];
        make_move(&mut state, from, to, Some(promotion)).expect("legal move should apply");
    }
}

#[test]
fn unmake_restores_every_position_exactly() {
    for seed in 0..PLAYOUTS {
        for_each_playout_position(seed, |state| {
            let mut scratch = state.clone();
            for (from, to) in all_legal_moves(state) {
                for promotion in [None, Some(PieceKind::Knight)] {
                    let record =
                        make_move(&mut scratch, from, to, promotion).expect("legal move should apply");
                    unmake_move(&mut scratch, &record);
                    assert_eq!(
                        &scratch, state,
                        "{from}{to} did not round trip from {}",
                        state.get_fen()
                    );
                }
            }
        });
    }
}

#[test]
fn legal_moves_never_leave_the_mover_in_check() {
    for seed in 0..PLAYOUTS {
        for_each_playout_position(seed, |state| {
            let mover = state.side_to_move;
            for (from, to) in all_legal_moves(state) {
                let mut after = state.clone();
                make_move(&mut after, from, to, None).expect("legal move should apply");
                assert!(
                    !is_king_in_check(&after, mover),
                    "{from}{to} leaves the king in check in {}",
                    state.get_fen()
                );
            }
        });
    }
}

#[test]
fn rejected_pseudo_legal_moves_expose_the_king_or_castle_through_attack() {
    for seed in 0..PLAYOUTS {
        for_each_playout_position(seed, |state| {
            let mover = state.side_to_move;
            let enemy_attacks = squares_attacked_by(state, mover.opposite());

            for (from, piece) in state.board.pieces_of(mover) {
                let legal = legal_moves_for(state, from);
                for to in pseudo_legal_moves_for(state, from) {
                    if legal.contains(&to) {
                        continue;
                    }

                    let mut after = state.clone();
                    make_move(&mut after, from, to, None).expect("pseudo-legal move should apply");
                    if is_king_in_check(&after, mover) {
                        continue;
                    }

                    let side = castle_side_of(piece, from, to)
                        .unwrap_or_else(|| panic!("{from}{to} rejected without reason in {}", state.get_fen()));
                    let crossed = [from, from.offset(0, side.direction()).expect("transit square")];
                    assert!(
                        crossed.iter().any(|sq| enemy_attacks.contains(*sq)),
                        "castle {from}{to} rejected with a safe path in {}",
                        state.get_fen()
                    );
                }
            }
        });
    }
}
