//! The single owned aggregate a UI drives.
//!
//! `GameState` owns the current position, the undo/redo history, the
//! captured-piece lists and the game status. Every mutation runs to
//! completion and leaves those views consistent with the history stack.

use tracing::{debug, info, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::game_state::move_history::{MoveHistory, NotationRow};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::game_end::{evaluate_game_end, GameStatus};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves_for;
use crate::utils::pgn::write_pgn;

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    /// Configured starting position; every reset returns here.
    initial: BoardState,
    /// Position the recorded moves start from. Differs from `initial` only
    /// after Black was handed the first move.
    history_start: BoardState,
    board_state: BoardState,
    history: MoveHistory,
    /// Indexed by the capturing side.
    captured: [Vec<Piece>; 2],
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting array, White to move.
    pub fn new_game() -> Self {
        Self::from_board_state(GameConfig::default(), BoardState::new_game())
    }

    pub fn with_config(config: GameConfig) -> ChessResult<Self> {
        if !config.default_promotion.is_promotion_target() {
            return Err(ChessError::InvalidPromotion(config.default_promotion));
        }
        let initial = BoardState::from_fen(&config.starting_fen)?;
        let mut game = Self::from_board_state(config, initial);
        game.evaluate_game_end();
        Ok(game)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Self::with_config(GameConfig::default().with_starting_fen(fen))
    }

    fn from_board_state(config: GameConfig, initial: BoardState) -> Self {
        Self {
            config,
            board_state: initial.clone(),
            history_start: initial.clone(),
            initial,
            history: MoveHistory::new(),
            captured: [Vec::new(), Vec::new()],
            status: GameStatus::InProgress,
        }
    }

    /// Drops all history and returns to the configured starting position.
    pub fn reset_to_initial_position(&mut self) {
        self.board_state = self.initial.clone();
        self.history_start = self.initial.clone();
        self.history.clear();
        self.captured = [Vec::new(), Vec::new()];
        self.status = GameStatus::InProgress;
        self.evaluate_game_end();
        debug!(fen = %self.board_state.get_fen(), "game reset");
    }

    #[inline]
    pub fn board_state(&self) -> &BoardState {
        &self.board_state
    }

    /// Position the move list and PGN movetext are numbered from.
    #[inline]
    pub fn history_start(&self) -> &BoardState {
        &self.history_start
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board_state.side_to_move
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board_state.piece_at(square)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        self.board_state.get_fen()
    }

    /// Legal destinations for the piece on `square`; empty for empty squares,
    /// pieces of the side not on move, and finished games.
    pub fn legal_moves_for(&self, square: Square) -> Vec<Square> {
        if self.status.is_over() {
            return Vec::new();
        }
        match self.board_state.piece_at(square) {
            Some(piece) if piece.color == self.board_state.side_to_move => {
                legal_moves_for(&self.board_state, square)
            }
            _ => Vec::new(),
        }
    }

    /// Plays a move chosen from [`legal_moves_for`](Self::legal_moves_for).
    ///
    /// `promotion` is consulted only when a pawn reaches its last row; `None`
    /// falls back to the configured default piece.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<&MoveRecord> {
        if self.status.is_over() {
            warn!(%from, %to, "move rejected, game is over");
            return Err(ChessError::GameOver);
        }
        if !self.legal_moves_for(from).contains(&to) {
            warn!(%from, %to, "illegal move rejected");
            return Err(ChessError::IllegalMove { from, to });
        }

        let promotion = promotion.or(Some(self.config.default_promotion));
        let record = make_move(&mut self.board_state, from, to, promotion)?;
        debug!(
            player = record.player.name(),
            notation = %record.notation,
            "move applied"
        );

        self.captured[record.player.index()].extend(record.captured_pieces());
        self.history.push_new(record);
        self.evaluate_game_end();

        let index = self.history.applied().len() - 1;
        Ok(&self.history.applied()[index])
    }

    /// Re-chooses the promotion piece of the latest move, for UIs that ask
    /// only after the pawn has landed. The position changes, so any pending
    /// redo moves are discarded.
    pub fn attach_promotion(&mut self, kind: PieceKind) -> ChessResult<&MoveRecord> {
        if !kind.is_promotion_target() {
            return Err(ChessError::InvalidPromotion(kind));
        }
        let last = self
            .history
            .last()
            .filter(|record| record.promotion.is_some())
            .ok_or(ChessError::NoPromotionToAttach)?;

        let updated = last.with_promotion(kind);
        self.board_state.board.put(updated.to, updated.landed_piece());
        debug!(notation = %updated.notation, "promotion attached");
        self.history.replace_last(updated);
        self.history.clear_redo();

        self.status = GameStatus::InProgress;
        self.evaluate_game_end();

        let index = self.history.applied().len() - 1;
        Ok(&self.history.applied()[index])
    }

    /// Takes back the latest move. Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop_applied() else {
            return false;
        };

        unmake_move(&mut self.board_state, &record);
        debug!(notation = %record.notation, "move undone");
        self.history.push_undone(record);
        self.status = GameStatus::InProgress;
        self.captured = self.history.rebuild_captured();
        true
    }

    /// Replays the most recently undone move. Returns `false` when there is
    /// nothing to redo or the game is over.
    pub fn redo(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        let Some(original) = self.history.pop_redo() else {
            return false;
        };

        let mut fresh = match make_move(
            &mut self.board_state,
            original.from,
            original.to,
            original.promotion,
        ) {
            Ok(record) => record,
            Err(err) => {
                warn!(%err, notation = %original.notation, "redo failed");
                self.history.push_undone(original);
                return false;
            }
        };

        // Captures and notation come from the historical record.
        fresh.notation = original.notation.clone();
        self.captured[original.player.index()].extend(original.captured_pieces());
        debug!(notation = %fresh.notation, "move redone");
        self.history.push_redone(fresh);
        self.evaluate_game_end();
        true
    }

    /// Lets Black make the first move. Only allowed before any move was played.
    pub fn pass_first_move(&mut self) -> ChessResult<()> {
        if !self.history.is_empty() {
            return Err(ChessError::HistoryNotEmpty);
        }
        self.history.clear();
        let side = self.board_state.side_to_move.opposite();
        self.board_state.side_to_move = side;
        self.board_state.en_passant_target = None;
        self.history_start = self.board_state.clone();
        self.evaluate_game_end();
        debug!(side = side.name(), "first move passed");
        Ok(())
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board_state, color)
    }

    /// Re-evaluates and stores the game status for the side to move.
    pub fn evaluate_game_end(&mut self) -> GameStatus {
        let status = evaluate_game_end(&self.board_state);
        if status != self.status {
            match status {
                GameStatus::Checkmate { winner } => info!(winner = winner.name(), "checkmate"),
                GameStatus::Stalemate => info!("stalemate"),
                GameStatus::InProgress => {}
            }
        }
        self.status = status;
        status
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Pieces captured by `color`, in capture order.
    #[inline]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        self.history.applied()
    }

    #[inline]
    pub fn redo_stack(&self) -> &[MoveRecord] {
        self.history.redo_stack()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn notation_rows(&self) -> Vec<NotationRow> {
        self.history.notation_rows()
    }

    /// PGN text of the game so far.
    pub fn to_pgn(&self) -> String {
        write_pgn(self)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_config::GameConfig;
    use crate::move_generation::game_end::GameStatus;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn play(game: &mut GameState, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            game.apply_move(sq(from), sq(to), None)
                .unwrap_or_else(|err| panic!("{from}{to} should be legal: {err}"));
        }
    }

    #[test]
    fn only_side_to_move_gets_destinations() {
        let game = GameState::new_game();
        assert_eq!(game.legal_moves_for(sq("e2")).len(), 2);
        assert!(game.legal_moves_for(sq("e7")).is_empty());
        assert!(game.legal_moves_for(sq("e4")).is_empty());
    }

    #[test]
    fn illegal_destination_is_rejected_without_side_effects() {
        let mut game = GameState::new_game();
        let err = game.apply_move(sq("e2"), sq("e5"), None).expect_err("e2e5 is illegal");
        assert_eq!(err, ChessError::IllegalMove { from: sq("e2"), to: sq("e5") });
        assert!(game.history().is_empty());
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn captures_are_tracked_per_capturing_side() {
        let mut game = GameState::new_game();
        play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5")]);
        assert_eq!(game.captured_by(Color::White), &[Piece::new(Color::Black, PieceKind::Pawn)]);
        assert_eq!(game.captured_by(Color::Black), &[Piece::new(Color::White, PieceKind::Pawn)]);

        assert!(game.undo());
        assert!(game.captured_by(Color::Black).is_empty());
        assert_eq!(game.captured_by(Color::White).len(), 1);
    }

    #[test]
    fn new_move_after_undo_clears_redo() {
        let mut game = GameState::new_game();
        play(&mut game, &[("e2", "e4"), ("e7", "e5")]);
        assert!(game.undo());
        assert!(game.can_redo());
        play(&mut game, &[("c7", "c5")]);
        assert!(!game.can_redo());
        assert!(!game.redo());
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_do_nothing() {
        let mut game = GameState::new_game();
        assert!(!game.undo());
        assert!(!game.redo());
    }

    #[test]
    fn promotion_choice_and_late_attachment() {
        let mut game = GameState::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let record = game.apply_move(sq("b7"), sq("b8"), Some(PieceKind::Rook)).expect("b8=R");
        assert_eq!(record.notation, "b8=R");

        let record = game.attach_promotion(PieceKind::Knight).expect("attach knight");
        assert_eq!(record.notation, "b8=N");
        assert_eq!(game.piece_at(sq("b8")), Some(Piece::new(Color::White, PieceKind::Knight)));

        assert_eq!(
            game.attach_promotion(PieceKind::King).expect_err("kings are not promotion targets"),
            ChessError::InvalidPromotion(PieceKind::King)
        );

        assert!(game.undo());
        assert_eq!(game.piece_at(sq("b7")), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(game.redo());
        assert_eq!(game.piece_at(sq("b8")), Some(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(game.history()[0].notation, "b8=N");
    }

    #[test]
    fn attach_promotion_needs_a_promoting_last_move() {
        let mut game = GameState::new_game();
        assert_eq!(
            game.attach_promotion(PieceKind::Queen).expect_err("no moves yet"),
            ChessError::NoPromotionToAttach
        );
        play(&mut game, &[("e2", "e4")]);
        assert_eq!(
            game.attach_promotion(PieceKind::Queen).expect_err("e4 does not promote"),
            ChessError::NoPromotionToAttach
        );
    }

    #[test]
    fn configured_default_promotion_is_used() {
        let config = GameConfig::default()
            .with_starting_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1")
            .with_default_promotion(PieceKind::Knight);
        let mut game = GameState::with_config(config).expect("config should load");
        let record = game.apply_move(sq("b7"), sq("b8"), None).expect("b8 promotes");
        assert_eq!(record.promotion, Some(PieceKind::Knight));

        let bad = GameConfig::default().with_default_promotion(PieceKind::Pawn);
        assert!(matches!(GameState::with_config(bad), Err(ChessError::InvalidPromotion(PieceKind::Pawn))));
    }

    #[test]
    fn finished_game_blocks_moves_until_undo() {
        let mut game = GameState::new_game();
        play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);
        assert_eq!(game.status(), GameStatus::Checkmate { winner: Color::Black });
        assert!(game.legal_moves_for(sq("a2")).is_empty());
        assert_eq!(
            game.apply_move(sq("a2"), sq("a3"), None).expect_err("game is over"),
            ChessError::GameOver
        );

        assert!(game.undo());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.redo());
        assert!(game.is_over());
    }

    #[test]
    fn black_may_move_first_only_before_any_move() {
        let mut game = GameState::new_game();
        game.pass_first_move().expect("no moves played yet");
        assert_eq!(game.side_to_move(), Color::Black);
        play(&mut game, &[("e7", "e5")]);
        assert_eq!(game.pass_first_move(), Err(ChessError::HistoryNotEmpty));

        assert_eq!(game.history_start().side_to_move, Color::Black);

        game.reset_to_initial_position();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.history_start().side_to_move, Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn reset_restores_the_starting_array() {
        let mut game = GameState::new_game();
        play(&mut game, &[("g1", "f3"), ("g8", "f6")]);
        game.reset_to_initial_position();
        assert_eq!(game.board_state(), &crate::game_state::board_state::BoardState::new_game());
        assert!(!game.can_undo());
        assert!(!game.can_redo());
    }
}
