//! Conversions between board coordinates and algebraic text.
//!
//! Squares are written file-then-rank (`e4`). Coordinate moves append the
//! destination and an optional promotion letter (`e7e8n`), the form the
//! terminal front end reads.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    // Rank 8 is row 0.
    Ok(Square::at(b'8' - rank, file - b'a'))
}

/// A move typed as origin, destination and optional promotion letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Parse `e2e4` or `e7e8q`. Only knight, bishop, rook and queen letters are
/// accepted as promotion suffixes.
pub fn parse_coordinate_move(text: &str) -> ChessResult<CoordinateMove> {
    let text = text.trim();
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => {
            let kind = PieceKind::from_letter(ch)
                .ok_or_else(|| ChessError::InvalidSquare(text.to_owned()))?;
            if !kind.is_promotion_target() {
                return Err(ChessError::InvalidPromotion(kind));
            }
            Some(kind)
        }
    };

    Ok(CoordinateMove {
        from,
        to,
        promotion,
    })
}
