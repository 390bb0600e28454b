//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the position model, the attack tables, legal move generation with
//! make/unmake, game-end detection and the text utilities (algebraic squares,
//! FEN, PGN, board rendering) so the terminal front end, tests and benches
//! can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
    pub mod move_history;
    pub mod move_record;
}

pub mod moves {
    pub mod attack_set;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_end;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod notation;
    pub mod pgn;
    pub mod render_game_state;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::game_state::GameState;
