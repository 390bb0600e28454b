//! Error types shared by the rules engine and its text utilities.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

/// Represents all recoverable failures surfaced by the engine.
///
/// Out-of-range coordinates are not listed here: they are programming errors
/// and trip an assertion in [`Square::at`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The provided algebraic square (for example `e9`) could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    /// The provided FEN string is invalid or could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The destination is not among the legal moves of the piece on `from`.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// The game ended in checkmate or stalemate; only undo or reset are accepted.
    #[error("game is over")]
    GameOver,

    /// A promotion choice was supplied but the latest move did not promote.
    #[error("latest move is not a promotion")]
    NoPromotionToAttach,

    /// Pawns can only promote to a knight, bishop, rook or queen.
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    /// The first move can only be handed over before anything was played.
    #[error("moves have already been played")]
    HistoryNotEmpty,
}

pub type ChessResult<T> = Result<T, ChessError>;
