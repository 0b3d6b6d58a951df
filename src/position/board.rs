use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use crate::piece::Piece;

use super::square::{Square, BOARD_DIM};

/// Token rendered for an empty square.
pub const EMPTY_TOKEN: &str = "--";

/// The 8x8 grid. Each square holds a piece or nothing.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_DIM as usize]; BOARD_DIM as usize],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_DIM as usize]; BOARD_DIM as usize],
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self[sq]
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self[sq] = piece;
    }

    /// Occupied squares in row-major order.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter_all_squares().filter_map(|sq| self[sq].map(|p| (sq, p)))
    }

    /// Two character token for a square: the piece token, or `--`.
    pub fn token_at(&self, sq: Square) -> String {
        match self[sq] {
            Some(p) => p.to_string(),
            None => EMPTY_TOKEN.to_owned(),
        }
    }

    /// Read-only token grid, row 0 first, for renderers.
    pub fn to_tokens(&self) -> Vec<Vec<String>> {
        (0..BOARD_DIM)
            .map(|row| {
                (0..BOARD_DIM)
                    .map(|col| self.token_at(Square::new(row, col)))
                    .collect()
            })
            .collect()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row() as usize][sq.col() as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.squares[sq.row() as usize][sq.col() as usize]
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_DIM {
            write!(f, "{} ", BOARD_DIM - row)?;

            for col in 0..BOARD_DIM {
                write!(f, "{} ", self.token_at(Square::new(row, col)))?;
            }

            writeln!(f)?;
        }

        write!(f, "  ")?;
        for col in 0..BOARD_DIM {
            write!(f, " {} ", (b'a' + col) as char)?;
        }

        Ok(())
    }
}
