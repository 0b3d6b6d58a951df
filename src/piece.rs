use std::fmt::{Debug, Display, Write};

use anyhow::{bail, Result};
use num_enum::TryFromPrimitive;
use strum::{EnumCount, EnumIter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, EnumIter, Debug)]
pub enum Colour {
    White = 0,
    Black = 1,
}

impl Colour {
    pub fn next(self) -> Colour {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Single character used in piece tokens and FEN.
    pub fn to_char(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, TryFromPrimitive, Debug)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn score(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 350,
            PieceKind::Rook => 500,
            PieceKind::Queen => 1000,
            PieceKind::King => 10000,
        }
    }

    /// Token letter: pawns are lower case, everything else upper case.
    pub fn to_token_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_token_char(c: char) -> Option<PieceKind> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.to_token_char())
    }
}

macro_rules! mkp {
    ($colour:ident, $kind:ident) => {
        crate::piece::Piece::new(
            crate::piece::PieceKind::$kind,
            crate::piece::Colour::$colour,
        )
    };
}

pub(crate) use mkp;

/// A coloured piece packed into a single byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    idx: u8,
}

impl Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {:?}", self.colour(), self.kind())
    }
}

impl Piece {
    pub fn new(kind: PieceKind, colour: Colour) -> Self {
        Self {
            idx: kind as u8 + (colour as u8 * PieceKind::COUNT as u8),
        }
    }

    pub fn kind(self) -> PieceKind {
        match PieceKind::try_from(self.idx % PieceKind::COUNT as u8) {
            Ok(kind) => kind,
            Err(_) => unreachable!("piece index is always built from a valid kind"),
        }
    }

    pub fn colour(self) -> Colour {
        if self.idx / PieceKind::COUNT as u8 == 0 {
            Colour::White
        } else {
            Colour::Black
        }
    }

    /// Parse a two character `<colour><kind>` token such as `wp` or `bQ`.
    pub fn from_token(token: &str) -> Result<Piece> {
        let mut chars = token.chars();

        let (Some(c), Some(k), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Piece token '{token}' is not two characters long");
        };

        let colour = match c {
            'w' => Colour::White,
            'b' => Colour::Black,
            _ => bail!("Invalid colour '{c}' in piece token '{token}'"),
        };

        let Some(kind) = PieceKind::from_token_char(k) else {
            bail!("Invalid piece kind '{k}' in piece token '{token}'");
        };

        Ok(Piece::new(kind, colour))
    }
}

/// Renders the two character token, e.g. `wN`.
impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.colour().to_char(), self.kind())
    }
}
