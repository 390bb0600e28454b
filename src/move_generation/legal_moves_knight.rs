//! Knight pseudo-legal targets.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_offset_targets;

pub fn generate_knight_moves(board_state: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    push_offset_targets(&board_state.board, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_on_b1_has_two_targets_at_start() {
        let state = BoardState::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&state, "b1".parse().expect("b1"), Color::White, &mut out);
        let names: Vec<String> = out.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["a3", "c3"]);
    }
}
