//! FEN-to-BoardState parser.
//!
//! Accepts the four mandatory Forsyth-Edwards fields; the halfmove clock and
//! fullmove number may be omitted and default to `0` and `1`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<BoardState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board_state = BoardState::new_empty();

    parse_board(board_part, &mut board_state)?;
    board_state.side_to_move = parse_side_to_move(side_part)?;
    board_state.castling_rights = parse_castling_rights(castling_part)?;
    board_state.en_passant_target = parse_en_passant_target(en_passant_part)?;
    if let Some(halfmove) = halfmove_part {
        board_state.halfmove_clock = halfmove
            .parse::<u16>()
            .map_err(|_| invalid(format!("halfmove clock {halfmove}")))?;
    }
    if let Some(fullmove) = fullmove_part {
        board_state.fullmove_number = fullmove
            .parse::<u16>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| invalid(format!("fullmove number {fullmove}")))?;
    }

    Ok(board_state)
}

fn invalid(reason: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(reason.into())
}

fn parse_board(board_part: &str, board_state: &mut BoardState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(invalid(format!("rank {} has too many files", 8 - row)));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("piece character '{ch}'")))?;

            let square = Square::new(row as u8, col)
                .ok_or_else(|| invalid(format!("rank {} has too many files", 8 - row)))?;
            board_state.board.put(square, piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.grant(Color::White, CastleSide::Kingside),
            'Q' => rights.grant(Color::White, CastleSide::Queenside),
            'k' => rights.grant(Color::Black, CastleSide::Kingside),
            'q' => rights.grant(Color::Black, CastleSide::Queenside),
            _ => return Err(invalid(format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("en-passant square '{en_passant_part}'")))?;
    Ok(Some(square))
}
