//! Immutable descriptor of one applied move.
//!
//! A record carries everything needed to reverse the move exactly: what was
//! captured (and where), plus snapshots of the position flags before the move.

use crate::game_state::chess_types::*;
use crate::utils::notation::move_notation;

/// Rook hop performed alongside a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookRelocation {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` (a pawn for promotions).
    pub piece: Piece,
    /// Piece displaced from `to`.
    pub captured: Option<Piece>,
    /// Pawn removed by an en-passant capture and the square it stood on.
    pub en_passant_capture: Option<(Square, Piece)>,
    pub prev_en_passant_target: Option<Square>,
    pub prev_castling_rights: CastlingRights,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
    pub rook_relocation: Option<RookRelocation>,
    pub notation: String,
    pub promotion: Option<PieceKind>,
    pub player: Color,
}

impl MoveRecord {
    /// Pieces this move took off the board, displacement first.
    pub fn captured_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.captured
            .into_iter()
            .chain(self.en_passant_capture.map(|(_, piece)| piece))
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some() || self.en_passant_capture.is_some()
    }

    pub fn castle_side(&self) -> Option<CastleSide> {
        let relocation = self.rook_relocation?;
        CastleSide::from_rook_col(relocation.from.col())
    }

    /// Piece standing on `to` right after the move.
    pub fn landed_piece(&self) -> Piece {
        match self.promotion {
            Some(kind) => Piece::new(self.player, kind),
            None => self.piece,
        }
    }

    /// Same move with a different promotion piece and matching notation.
    pub fn with_promotion(&self, kind: PieceKind) -> Self {
        let mut next = self.clone();
        next.promotion = Some(kind);
        next.notation = move_notation(
            self.piece,
            self.from,
            self.to,
            self.is_capture(),
            self.castle_side(),
            Some(kind),
        );
        next
    }
}
