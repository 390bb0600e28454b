//! Construction-time options for a [`GameState`](crate::game_state::game_state::GameState).

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Position a new game (and every reset) starts from.
    pub starting_fen: String,
    /// Piece a pawn becomes when the caller gives no promotion choice.
    pub default_promotion: PieceKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_fen: STARTING_POSITION_FEN.to_owned(),
            default_promotion: PieceKind::Queen,
        }
    }
}

impl GameConfig {
    pub fn with_starting_fen(mut self, fen: impl Into<String>) -> Self {
        self.starting_fen = fen.into();
        self
    }

    pub fn with_default_promotion(mut self, kind: PieceKind) -> Self {
        self.default_promotion = kind;
        self
    }
}
