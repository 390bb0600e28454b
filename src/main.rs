use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_rules_engine::game_state::game_config::GameConfig;
use chess_rules_engine::game_state::game_state::GameState;
use chess_rules_engine::utils::algebraic::{algebraic_to_square, parse_coordinate_move};
use chess_rules_engine::utils::render_game_state::render_board_state;
use chess_rules_engine::ChessResult;

/// Two players sharing one terminal.
#[derive(Parser, Debug)]
#[command(name = "chess_rules_engine", version, about)]
struct Args {
    /// Start from this position instead of the standard array.
    #[arg(long)]
    fen: Option<String>,

    /// Draw the board with Black at the bottom.
    #[arg(long)]
    flipped: bool,
}

const HELP: &str = "\
commands:
  e2e4 | e7e8n   play a move (optional promotion letter n, b, r, q)
  moves e2       list legal destinations of the piece on e2
  undo | redo    step through the move history
  new            back to the starting position
  pass           let Black move first (only before the first move)
  fen | pgn      print the position or the game record
  flip           turn the board around
  help | quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = GameConfig::default();
    if let Some(fen) = &args.fen {
        config = config.with_starting_fen(fen.clone());
    }

    let mut game = match GameState::with_config(config) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "cannot start game");
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };
    let mut flipped = args.flipped;
    info!(fen = %game.get_fen(), "game started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_position(&game, flipped);

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default();
        let outcome = match command {
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                Ok(false)
            }
            "moves" => list_moves(&game, words.next().unwrap_or_default()).map(|_| false),
            "undo" => Ok(report(game.undo(), "nothing to undo")),
            "redo" => Ok(report(game.redo(), "nothing to redo")),
            "new" => {
                game.reset_to_initial_position();
                Ok(true)
            }
            "pass" => game.pass_first_move().map(|_| true),
            "fen" => {
                println!("{}", game.get_fen());
                Ok(false)
            }
            "pgn" => {
                print!("{}", game.to_pgn());
                Ok(false)
            }
            "flip" => {
                flipped = !flipped;
                Ok(true)
            }
            text => play(&mut game, text).map(|_| true),
        };

        match outcome {
            Ok(true) => print_position(&game, flipped),
            Ok(false) => {}
            Err(err) => println!("error: {err}"),
        }
        stdout.flush().ok();
    }
}

fn play(game: &mut GameState, text: &str) -> ChessResult<()> {
    let mv = parse_coordinate_move(text)?;
    let record = game.apply_move(mv.from, mv.to, mv.promotion)?;
    println!("{}", record.notation);
    Ok(())
}

fn list_moves(game: &GameState, square: &str) -> ChessResult<()> {
    let from = algebraic_to_square(square)?;
    let targets: Vec<String> = game
        .legal_moves_for(from)
        .iter()
        .map(|sq| sq.to_string())
        .collect();
    if targets.is_empty() {
        println!("no legal moves from {from}");
    } else {
        println!("{from}: {}", targets.join(" "));
    }
    Ok(())
}

fn report(done: bool, otherwise: &str) -> bool {
    if !done {
        println!("{otherwise}");
    }
    done
}

fn print_position(game: &GameState, flipped: bool) {
    println!("{}", render_board_state(game.board_state(), flipped));

    let rows = game.notation_rows();
    if let Some(row) = rows.last() {
        println!(
            "{}. {} {}",
            row.number,
            row.white.as_deref().unwrap_or("..."),
            row.black.as_deref().unwrap_or("")
        );
    }

    if game.is_over() {
        println!("game over: {}", game.status().result_token());
    } else {
        let side = game.side_to_move();
        let check = if game.is_king_in_check(side) { " (check)" } else { "" };
        println!("{} to move{check}", side.name());
    }
}
