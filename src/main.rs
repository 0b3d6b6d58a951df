use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use gambit::{
    game::{Game, GameConfig, Player},
    parsers::notation::parse_square,
    position::Position,
    search::Strategy,
};
use itertools::Itertools;
use nom::{combinator::all_consuming, Finish};

#[derive(clap::Parser)]
/// Play chess in the terminal. Moves are typed as two squares, e.g. `e2e4`.
struct Args {
    /// Who plays white.
    #[arg(long, value_enum, default_value_t = Player::Human)]
    white: Player,

    /// Who plays black.
    #[arg(long, value_enum, default_value_t = Player::Engine)]
    black: Player,

    /// How the engine picks its moves.
    #[arg(short, long, value_enum, default_value_t = Strategy::Best)]
    strategy: Strategy,

    /// Engine search depth in plies.
    #[arg(short, long, default_value_t = 2)]
    depth: u32,

    /// Seed for the engine's random choices.
    #[arg(long)]
    seed: Option<u64>,

    /// Start from this position instead of the initial one.
    #[arg(long)]
    fen: Option<String>,

    /// Stop after this many plies have been played.
    #[arg(long)]
    max_plies: Option<usize>,

    /// Log game events. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const HELP: &str = "\
<from><to>  play a move, e.g. e2e4
m [square]  list valid moves, optionally only from one square
l           show the move log
b           show the board
u           undo
r           new game
q           quit";

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn print_moves(game: &Game, from: Option<&str>) -> Result<()> {
    let moves = match from {
        Some(text) => {
            let (_, sq) = all_consuming(parse_square)(text)
                .finish()
                .map_err(|e| anyhow::anyhow!("Bad square '{text}': {e}"))?;
            game.moves_from(sq).copied().collect_vec()
        }
        None => game.valid_moves().to_vec(),
    };

    println!("{} moves: {}", moves.len(), moves.iter().join(" "));

    Ok(())
}

/// Handle one line of input. Returns false when the player quits.
fn command(game: &mut Game, line: &str) -> Result<bool> {
    let mut words = line.split_whitespace();

    match words.next() {
        None => (),
        Some("q") | Some("quit") => return Ok(false),
        Some("h") | Some("help") => println!("{HELP}"),
        Some("b") => {
            println!("{}", game.position());
            if let Some(m) = game.position().last_move() {
                println!("Last move: {m:?}");
            }
        }
        Some("l") => println!("{}", game.move_log_text().join(" ")),
        Some("m") => print_moves(game, words.next())?,
        Some("u") => {
            // Take back engine replies too, so the human is to move again.
            while let Some(m) = game.undo() {
                println!("Took back {m}");
                if game.is_human_turn() {
                    break;
                }
            }
            println!("{}", game.position());
        }
        Some("r") => {
            game.new_game();
            println!("{}", game.position());
        }
        Some(_) => {
            if game.is_over() || !game.is_human_turn() {
                println!("No move to make.");
            } else {
                let m = game.try_text_move(line)?;
                println!("{m:?}");
                println!("{}", game.position());
            }
        }
    }

    Ok(true)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level(args.verbose)))
        .init();

    let config = GameConfig {
        white: args.white,
        black: args.black,
        strategy: args.strategy,
        depth: args.depth,
        seed: args.seed,
    };

    let pos = match &args.fen {
        Some(fen) => Position::from_fen(fen).context("Could not create position from FEN string")?,
        None => Position::default(),
    };

    let mut game = Game::from_position(config, pos);
    let humans = [game.config().white, game.config().black].contains(&Player::Human);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", game.position());
    if humans {
        println!("{HELP}");
    }

    loop {
        if args
            .max_plies
            .is_some_and(|max| game.position().move_log().len() >= max)
        {
            println!("Reached the ply limit.");
            break;
        }

        if game.is_over() {
            println!("{:?} has no moves. Game over.", game.position().to_play());
            if !humans {
                break;
            }
        } else if !game.is_human_turn() {
            if let Some(m) = game.wait_engine() {
                println!("Engine plays {m:?}");
                println!("{}", game.position());
            }
            continue;
        }

        print!("{:?}> ", game.position().to_play());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Could not read line")?;

        match command(&mut game, line.trim()) {
            Ok(true) => (),
            Ok(false) => break,
            Err(e) => println!("{e:#}"),
        }
    }

    println!("{}", game.move_log_text().join(" "));

    Ok(())
}
