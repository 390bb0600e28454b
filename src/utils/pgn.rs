//! PGN export of a game's move list.
//!
//! Movetext comes straight from the recorded short-algebraic notation, so it
//! carries the same simplifications (no disambiguation, no check marks).

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameState;

/// Seven-tag roster with today's date, plus `SetUp`/`FEN` for custom starts.
pub fn write_pgn(game: &GameState) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());

    write_pgn_with_headers(game, &headers)
}

/// Writes `headers` as given, then fills in `Result` and the setup tags.
pub fn write_pgn_with_headers(game: &GameState, headers: &BTreeMap<String, String>) -> String {
    let mut headers = headers.clone();
    let result = game.status().result_token();
    headers.insert("Result".to_owned(), result.to_owned());

    let initial_fen = game.history_start().get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let first_number = usize::from(game.history_start().fullmove_number);
    let mut movetext_parts = Vec::<String>::new();
    for row in game.notation_rows() {
        let number = first_number + row.number - 1;
        match (row.white, row.black) {
            (Some(white), Some(black)) => {
                movetext_parts.push(format!("{number}. {white}"));
                movetext_parts.push(black);
            }
            (Some(white), None) => movetext_parts.push(format!("{number}. {white}")),
            (None, Some(black)) => movetext_parts.push(format!("{number}... {black}")),
            (None, None) => {}
        }
    }
    movetext_parts.push(result.to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');
    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
