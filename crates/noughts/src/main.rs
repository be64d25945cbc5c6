//! Console presentation adapter for the noughts engine.
//!
//! Peripheral glue only: reads cell selections from stdin, renders the
//! engine's structured results, and wires the restart control. All game
//! decisions live in the `noughts` library.

use anyhow::Result;
use clap::Parser;
use noughts::{Cell, Combo, Game, Mark, TurnResult};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Two-player tic-tac-toe at the console.
#[derive(Debug, Parser)]
#[command(name = "noughts")]
struct Cli {
    /// Display name for player X.
    #[arg(long, default_value = "Player X")]
    x_name: String,
    /// Display name for player O.
    #[arg(long, default_value = "Player O")]
    o_name: String,
    /// Emit each turn result as a JSON line alongside the board.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut game = Game::new(cli.x_name.as_str(), cli.o_name.as_str());

    if let Some(first) = game.active_mark() {
        println!("Coin toss: {} opens the game.", game.player(first).name());
    }
    render(&game, None);
    prompt(&game)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let input = line?;
        match input.trim() {
            "quit" | "q" => break,
            "restart" => {
                let first = game.restart();
                println!("New game. {} opens.", game.player(first).name());
                render(&game, None);
            }
            "score" => print_scores(&game),
            other => match parse_cell(other) {
                Some(cell) => take_turn(&mut game, cell, cli.json)?,
                None => {
                    println!("Enter a square number 1-9, 'restart', 'score', or 'quit'.");
                }
            },
        }
        prompt(&game)?;
    }

    Ok(())
}

/// Submits one move and renders whatever the engine reports back.
fn take_turn(game: &mut Game, cell: Cell, json: bool) -> Result<()> {
    match game.submit_move(cell) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string(&result)?);
            }
            match result {
                TurnResult::Continued(_) => render(game, None),
                TurnResult::Won { winner, line, .. } => {
                    render(game, Some(&line));
                    println!(
                        "{} wins on {}.",
                        game.player(winner).name(),
                        describe_line(&line)
                    );
                    print_scores(game);
                }
                TurnResult::Drawn { .. } => {
                    render(game, None);
                    println!("It's a draw.");
                    print_scores(game);
                }
            }
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

/// Maps a typed square number (1-9) to a cell.
fn parse_cell(input: &str) -> Option<Cell> {
    input
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=9).contains(n))
        .and_then(|n| Cell::from_index(n - 1))
}

/// Draws the 3x3 grid; claimed cells show their mark, open cells their
/// square number, and a winning line is bracketed.
fn render(game: &Game, highlight: Option<&Combo>) {
    for row in 0..3 {
        let mut out = String::new();
        for col in 0..3 {
            let idx = row * 3 + col;
            let cell = Cell::ALL[idx];
            let glyph = match game.owner_of(cell) {
                Some(mark) => mark.to_string(),
                None => (idx + 1).to_string(),
            };
            if highlight.is_some_and(|combo| combo.contains(&cell)) {
                out.push_str(&format!("[{glyph}]"));
            } else {
                out.push_str(&format!(" {glyph} "));
            }
            if col < 2 {
                out.push('|');
            }
        }
        println!("{out}");
        if row < 2 {
            println!("---+---+---");
        }
    }
}

fn describe_line(line: &Combo) -> String {
    let labels: Vec<_> = line.iter().map(Cell::label).collect();
    labels.join(", ")
}

fn print_scores(game: &Game) {
    for mark in [Mark::X, Mark::O] {
        let player = game.player(mark);
        let score = player.score();
        println!(
            "{}: {} wins, {} ties, {} losses",
            player.name(),
            score.wins,
            score.ties,
            score.losses
        );
    }
}

fn prompt(game: &Game) -> Result<()> {
    match game.active_mark() {
        Some(mark) => print!("{} ({mark}) > ", game.player(mark).name()),
        None => print!("Game over - 'restart' or 'quit' > "),
    }
    io::stdout().flush()?;
    Ok(())
}
