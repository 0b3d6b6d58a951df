use std::fmt::Display;

use anyhow::{anyhow, Result};
use nom::{
    character::complete::{multispace0, one_of},
    combinator::{all_consuming, map, opt},
    sequence::{delimited, tuple},
    Finish, IResult,
};

use crate::{
    mmove::Move,
    position::square::{File, Rank, Square},
};

/// A move as typed by a player: two squares, e.g. `e2e4`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct CoordMove {
    pub src: Square,
    pub dst: Square,
}

fn parse_rank(input: &str) -> IResult<&str, Rank> {
    map(one_of("12345678"), |x| match x {
        '1' => Rank::One,
        '2' => Rank::Two,
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        _ => unreachable!("Parser will only accept valid ranks"),
    })(input)
}

fn parse_file(input: &str) -> IResult<&str, File> {
    map(one_of("abcdefgh"), |x| -> File {
        match x {
            'a' => File::A,
            'b' => File::B,
            'c' => File::C,
            'd' => File::D,
            'e' => File::E,
            'f' => File::F,
            'g' => File::G,
            'h' => File::H,
            _ => unreachable!("Parser will only accept valid files"),
        }
    })(input)
}

pub fn parse_square(input: &str) -> IResult<&str, Square> {
    map(tuple((parse_file, parse_rank)), |(f, r)| {
        Square::from_rank_file(r, f)
    })(input)
}

/// `e2e4`, `e2 e4` or `e2-e4`.
pub fn parse_coord_move(input: &str) -> IResult<&str, CoordMove> {
    map(
        tuple((parse_square, opt(one_of(" -")), parse_square)),
        |(src, _, dst)| CoordMove { src, dst },
    )(input)
}

impl CoordMove {
    /// Parse a whole line, ignoring surrounding whitespace.
    pub fn from_text(input: &str) -> Result<CoordMove> {
        all_consuming(delimited(multispace0, parse_coord_move, multispace0))(input)
            .finish()
            .map(|(_, m)| m)
            .map_err(|e| anyhow!("Could not parse move '{}': {e}", input.trim()))
    }
}

impl Display for CoordMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.src, self.dst)
    }
}

impl From<Move> for CoordMove {
    fn from(value: Move) -> Self {
        CoordMove {
            src: value.src,
            dst: value.dst,
        }
    }
}
