//! Terminal host for the unbeatable tic-tac-toe engine.
//!
//! A thin presentation layer: it turns typed coordinates into cells,
//! forwards them to the engine, and redraws. All game logic lives in
//! `unbeatable_tictactoe`.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{Cell, Engine, Player};

/// A game of tic-tac-toe that you can't win.
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Play tic-tac-toe against the blocking/forking engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the engine's tie-break randomness, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

/// Ways a typed move can fail to name a cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
enum InputError {
    /// The line was not `col row` or a single square number.
    #[display("could not read a cell from {_0:?}; try `col row` or a square number 1-9")]
    Unparseable(String),

    /// Numbers were read but fell outside the board.
    #[display("coordinates must be 0-2 each, or a square number 1-9")]
    OutOfRange,
}

impl std::error::Error for InputError {}

/// Parses `col row` (both 0-2) or a single square number (1-9, row-major).
fn parse_cell(input: &str) -> Result<Cell, InputError> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    match fields.as_slice() {
        [square] => {
            let number: usize = square
                .parse()
                .map_err(|_| InputError::Unparseable(input.to_string()))?;
            number
                .checked_sub(1)
                .and_then(Cell::from_index)
                .ok_or(InputError::OutOfRange)
        }
        [col, row] => {
            let col: u8 = col
                .parse()
                .map_err(|_| InputError::Unparseable(input.to_string()))?;
            let row: u8 = row
                .parse()
                .map_err(|_| InputError::Unparseable(input.to_string()))?;
            Cell::new(col, row).ok_or(InputError::OutOfRange)
        }
        _ => Err(InputError::Unparseable(input.to_string())),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut engine = match cli.seed {
        Some(seed) => Engine::with_rng(StdRng::seed_from_u64(seed)),
        None => Engine::new(),
    };
    info!(seed = ?cli.seed, "starting a new game");

    println!("You are X. Enter `col row` (0-2 each) or a square number 1-9.");
    println!("Enter `quit` to leave.");

    let stdin = io::stdin();
    let mut input_lines = stdin.lock().lines();
    loop {
        println!("\n{}\n", engine.board().display());
        if engine.is_over() {
            break;
        }

        print!("your move> ");
        io::stdout().flush()?;
        let Some(line) = input_lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let cell = match parse_cell(trimmed) {
            Ok(cell) => cell,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        if !engine.record_human_move(cell) {
            println!("{cell} is taken; pick an empty square");
            continue;
        }
        debug!(%cell, "human played");

        if let Some(reply) = engine.compute_cpu_move() {
            debug!(%reply, "engine replied");
            println!("the machine takes {reply}");
        }
    }

    match engine.winner() {
        Some(Player::Cpu) => println!("you didn't win!"),
        Some(Player::Human) => println!("you won! (the strategy has its blind spots)"),
        None => println!("a draw. you still didn't win!"),
    }
    Ok(())
}
