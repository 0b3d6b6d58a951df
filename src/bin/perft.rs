use std::{
    io::{self, BufRead},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use gambit::{
    parsers::notation::{parse_coord_move, CoordMove},
    position::Position,
};
use log::info;
use nom::{
    bytes::complete::tag, character::complete::digit1, combinator::map_res, sequence::tuple, Finish,
};

#[derive(clap::Parser)]
/// Count the pseudo-legal move tree below a position, split by first move.
struct Args {
    /// The depth of the perft search.
    depth: u32,

    /// The FEN string of the position to perform perft on. Defaults to the
    /// initial position.
    fen: Option<String>,

    /// Compare against perft split output pasted from another generator,
    /// descending into the first move whose counts differ.
    #[arg(short, long)]
    debug: bool,
}

fn debug(mut moves_made: Vec<CoordMove>, mut pos: Position, depth: u32) -> Result<()> {
    print!("position fen \"{}\" moves ", pos.to_fen());
    moves_made.iter().for_each(|m| print!("{} ", m));
    println!();
    println!("Depth: {}", depth);

    if depth == 0 {
        println!("Reached depth 0 without finding a difference.");
        return Ok(());
    }

    let other_moves = read_other_perft_output()?;

    let perft: Vec<_> = pos
        .perft(depth)
        .into_iter()
        .map(|(m, x)| (m, CoordMove::from(m), x))
        .collect();

    for other_move in other_moves.iter() {
        if !perft.iter().any(|x| other_move.0 == x.1) {
            println!("Move {} exists in the other generator, but not us.", other_move.0);
            return Ok(());
        }
    }

    for (m, coord, n) in perft {
        let Some(other) = other_moves.iter().find(|x| coord == x.0) else {
            println!("Move {} exists in our generator, but not the other.", coord);
            return Ok(());
        };

        if other.1 != n {
            println!("Move {} contains differing perft result. Making move.", coord);
            pos.make_move(m);
            moves_made.push(coord);
            return debug(moves_made, pos, depth - 1);
        }
    }

    println!("Perft results match.");

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut position = match &args.fen {
        Some(fen) => {
            Position::from_fen(fen).context("Could not create position from FEN string")?
        }
        None => Position::default(),
    };

    info!("perft depth {} on {}", args.depth, position.to_fen());

    let now = Instant::now();
    let perft = position.perft(args.depth);
    let time_taken = now.elapsed();

    for (m, n) in perft.iter() {
        println!("{}: {}", CoordMove::from(*m), n);
    }

    let total_nodes: u64 = perft.iter().map(|(_, n)| n).sum();

    println!("===========");
    println!("Total nodes: {}", total_nodes);
    println!("Time taken: {:?}", time_taken);
    println!(
        "Node per second: {}",
        total_nodes as f32 / time_taken.as_secs_f32()
    );

    if args.debug {
        debug(Vec::new(), position, args.depth)?;
    }

    Ok(())
}

fn parse_perft_line(input: &str) -> Result<(CoordMove, u64)> {
    Ok(map_res(
        tuple((parse_coord_move, tag(": "), digit1)),
        |(m, _, n)| -> Result<(CoordMove, u64)> { Ok((m, n.parse()?)) },
    )(input)
    .map_err(|e| e.to_owned())
    .finish()
    .map(|x| x.1)?)
}

fn read_other_perft_output() -> Result<Vec<(CoordMove, u64)>> {
    println!("Enter the perft output from another generator, followed by a blank newline:");
    let stdin = io::stdin();
    let mut ret = Vec::new();

    for line in stdin.lock().lines() {
        let line = line.context("Could not read line")?;

        if line.is_empty() {
            break;
        }

        let perft_result = parse_perft_line(&line).context("Could not parse perft line")?;
        ret.push(perft_result);
    }

    Ok(ret)
}
