use std::num::ParseIntError;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{multispace0, not_line_ending, one_of},
    combinator::{map, map_res, opt},
    multi::{many1, separated_list1},
    sequence::{preceded, tuple},
    IResult,
};

use crate::piece::{Colour, Piece, PieceKind};

#[derive(Debug)]
pub enum FenElement {
    Piece(Piece),
    Space(u8),
}

/// Piece placement and side to move. Castling, en passant and the clocks
/// are accepted but not kept.
#[derive(Debug)]
pub struct Fen {
    pub board: Vec<Vec<FenElement>>,
    pub colour: Colour,
}

fn parse_space(input: &str) -> IResult<&str, FenElement> {
    map_res(
        one_of("12345678"),
        |x| -> Result<FenElement, ParseIntError> { Ok(FenElement::Space(x.to_string().parse()?)) },
    )(input)
}

fn parse_piece(input: &str) -> IResult<&str, FenElement> {
    map(one_of("rnbkqpRNBKQP"), |x| {
        let kind = match x.to_ascii_lowercase() {
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            'p' => PieceKind::Pawn,
            _ => unreachable!("other chars not allowed to be parsed"),
        };

        FenElement::Piece(Piece::new(
            kind,
            if x.is_ascii_uppercase() {
                Colour::White
            } else {
                Colour::Black
            },
        ))
    })(input)
}

fn parse_element(input: &str) -> IResult<&str, FenElement> {
    alt((parse_piece, parse_space))(input)
}

fn parse_rank(input: &str) -> IResult<&str, Vec<FenElement>> {
    many1(parse_element)(input)
}

fn parse_board(input: &str) -> IResult<&str, Vec<Vec<FenElement>>> {
    separated_list1(tag("/"), parse_rank)(input)
}

fn parse_colour(input: &str) -> IResult<&str, Colour> {
    map(one_of("wb"), |x| match x {
        'w' => Colour::White,
        'b' => Colour::Black,
        _ => unreachable!("should only parse 'w' or 'b'"),
    })(input)
}

pub fn parse_fen(input: &str) -> IResult<&str, Fen> {
    map(
        tuple((
            preceded(multispace0, parse_board),
            tag(" "),
            parse_colour,
            opt(not_line_ending),
        )),
        |(b, _, c, _)| Fen {
            board: b,
            colour: c,
        },
    )(input)
}
