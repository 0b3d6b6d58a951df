use std::io::{stdin, stdout, BufRead, Write};

use anyhow::{Context, Result};
use env_logger::Env;
use gambit::position::{eval::Evaluator, Position};
use itertools::Itertools;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    print!("Enter FEN String: ");
    stdout().flush()?;

    let mut fen_string = String::new();
    stdin().lock().read_line(&mut fen_string)?;

    let pos = Position::from_fen(fen_string.trim()).context("Could not parse FEN string")?;
    let moves = pos.valid_moves();

    println!("{}", pos);
    println!("Material: {}", Evaluator::eval(&pos));
    println!("{} moves: {}", moves.len(), moves.iter().join(" "));
    println!(
        "Captures: {}",
        moves.iter().filter(|m| m.is_capture()).map(|m| format!("{m:?}")).join(", ")
    );

    for row in pos.board().to_tokens() {
        println!("{}", row.join(" "));
    }

    Ok(())
}
