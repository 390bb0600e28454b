//! Terminal-state detection for the side to move.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Checkmate {
        winner: Color,
    },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameStatus::InProgress => "*",
            GameStatus::Checkmate {
                winner: Color::White,
            } => "1-0",
            GameStatus::Checkmate {
                winner: Color::Black,
            } => "0-1",
            GameStatus::Stalemate => "1/2-1/2",
        }
    }
}

/// In progress while the side to move has any legal move; otherwise mate if
/// that side is in check, stalemate if not.
pub fn evaluate_game_end(board_state: &BoardState) -> GameStatus {
    if has_any_legal_move(board_state) {
        return GameStatus::InProgress;
    }

    let side = board_state.side_to_move;
    if is_king_in_check(board_state, side) {
        GameStatus::Checkmate {
            winner: side.opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}
