//! Linear undo/redo stacks of move records, plus the views derived from them.

use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::move_record::MoveRecord;

/// Applied moves (oldest first) and undone moves (most recently undone last).
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    applied: Vec<MoveRecord>,
    redo: Vec<MoveRecord>,
}

/// One numbered line of the move list. Either slot may be empty when the game
/// starts with Black or has not reached Black's reply yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationRow {
    pub number: usize,
    pub white: Option<String>,
    pub black: Option<String>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn applied(&self) -> &[MoveRecord] {
        &self.applied
    }

    #[inline]
    pub fn redo_stack(&self) -> &[MoveRecord] {
        &self.redo
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.applied.last()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Records a brand new move; any redo branch is discarded.
    pub fn push_new(&mut self, record: MoveRecord) {
        self.redo.clear();
        self.applied.push(record);
    }

    /// Records a move replayed from the redo stack, keeping the rest of it.
    pub fn push_redone(&mut self, record: MoveRecord) {
        self.applied.push(record);
    }

    pub fn pop_applied(&mut self) -> Option<MoveRecord> {
        self.applied.pop()
    }

    pub fn push_undone(&mut self, record: MoveRecord) {
        self.redo.push(record);
    }

    pub fn pop_redo(&mut self) -> Option<MoveRecord> {
        self.redo.pop()
    }

    /// Swaps the latest applied record for `record`, returning the old one.
    pub fn replace_last(&mut self, record: MoveRecord) -> Option<MoveRecord> {
        let last = self.applied.last_mut()?;
        Some(std::mem::replace(last, record))
    }

    /// Drops undone moves that no longer follow from the current position.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn clear(&mut self) {
        self.applied.clear();
        self.redo.clear();
    }

    /// Pieces captured by each side, rebuilt from scratch from applied moves.
    pub fn rebuild_captured(&self) -> [Vec<Piece>; 2] {
        let mut captured: [Vec<Piece>; 2] = [Vec::new(), Vec::new()];
        for record in &self.applied {
            captured[record.player.index()].extend(record.captured_pieces());
        }
        captured
    }

    /// Applied moves grouped into numbered turns.
    pub fn notation_rows(&self) -> Vec<NotationRow> {
        let mut rows = Vec::<NotationRow>::new();
        let mut white: Option<String> = None;

        for record in &self.applied {
            match record.player {
                Color::White => {
                    if let Some(pending) = white.take() {
                        rows.push(NotationRow {
                            number: rows.len() + 1,
                            white: Some(pending),
                            black: None,
                        });
                    }
                    white = Some(record.notation.clone());
                }
                Color::Black => {
                    rows.push(NotationRow {
                        number: rows.len() + 1,
                        white: white.take(),
                        black: Some(record.notation.clone()),
                    });
                }
            }
        }

        if let Some(pending) = white {
            rows.push(NotationRow {
                number: rows.len() + 1,
                white: Some(pending),
                black: None,
            });
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveHistory, NotationRow};
    use crate::game_state::board_state::BoardState;
    use crate::move_generation::legal_move_apply::make_move;

    fn play(state: &mut BoardState, history: &mut MoveHistory, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            let record = make_move(
                state,
                from.parse().expect("from square"),
                to.parse().expect("to square"),
                None,
            )
            .expect("move should apply");
            history.push_new(record);
        }
    }

    #[test]
    fn rows_pair_white_and_black_moves() {
        let mut state = BoardState::new_game();
        let mut history = MoveHistory::new();
        play(&mut state, &mut history, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);

        assert_eq!(
            history.notation_rows(),
            vec![
                NotationRow {
                    number: 1,
                    white: Some("e4".to_owned()),
                    black: Some("d5".to_owned()),
                },
                NotationRow {
                    number: 2,
                    white: Some("exd5".to_owned()),
                    black: None,
                },
            ]
        );
        let captured = history.rebuild_captured();
        assert_eq!(captured[0].len(), 1);
        assert!(captured[1].is_empty());
    }

    #[test]
    fn black_first_game_leaves_the_first_white_slot_empty() {
        let mut state = BoardState::new_game();
        state.side_to_move = crate::game_state::chess_types::Color::Black;
        let mut history = MoveHistory::new();
        play(&mut state, &mut history, &[("e7", "e5"), ("d2", "d4"), ("b8", "c6")]);

        let rows = history.notation_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].white, None);
        assert_eq!(rows[0].black.as_deref(), Some("e5"));
        assert_eq!(rows[1].white.as_deref(), Some("d4"));
        assert_eq!(rows[1].black.as_deref(), Some("Nc6"));
    }

    #[test]
    fn new_move_discards_redo_branch() {
        let mut state = BoardState::new_game();
        let mut history = MoveHistory::new();
        play(&mut state, &mut history, &[("e2", "e4")]);
        let undone = history.pop_applied().expect("one move applied");
        history.push_undone(undone);
        assert!(history.can_redo());

        play(&mut state, &mut history, &[("d7", "d5")]);
        assert!(!history.can_redo());
    }
}
