use std::fmt::{Debug, Display, Write};

use paste::paste;
use strum::EnumIter;

/// Number of rows (and columns) on the board.
pub const BOARD_DIM: u8 = 8;

#[cfg(test)]
macro_rules! rank {
    (1) => {
        crate::position::square::Rank::One
    };
    (2) => {
        crate::position::square::Rank::Two
    };
    (3) => {
        crate::position::square::Rank::Three
    };
    (4) => {
        crate::position::square::Rank::Four
    };
    (5) => {
        crate::position::square::Rank::Five
    };
    (6) => {
        crate::position::square::Rank::Six
    };
    (7) => {
        crate::position::square::Rank::Seven
    };
    (8) => {
        crate::position::square::Rank::Eight
    };
}

#[cfg(test)]
macro_rules! file {
    (a) => {
        crate::position::square::File::A
    };
    (b) => {
        crate::position::square::File::B
    };
    (c) => {
        crate::position::square::File::C
    };
    (d) => {
        crate::position::square::File::D
    };
    (e) => {
        crate::position::square::File::E
    };
    (f) => {
        crate::position::square::File::F
    };
    (g) => {
        crate::position::square::File::G
    };
    (h) => {
        crate::position::square::File::H
    };
}

/// `sq!(e 2)` is the square on file e, rank 2, i.e. row 6, column 4.
#[cfg(test)]
macro_rules! sq {
    ($file:ident $rank:tt) => {
        crate::position::square::Square::from_rank_file(
            crate::position::square::rank!($rank),
            crate::position::square::file!($file),
        )
    };
}

#[cfg(test)]
pub(crate) use file;
#[cfg(test)]
pub(crate) use rank;
#[cfg(test)]
pub(crate) use sq;

/// Ranks in chess order. Rank one is white's back rank, which is row 7.
#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    pub const fn to_row(self) -> u8 {
        BOARD_DIM - 1 - self as u8
    }

    const fn from_row(row: u8) -> Self {
        match row {
            7 => Self::One,
            6 => Self::Two,
            5 => Self::Three,
            4 => Self::Four,
            3 => Self::Five,
            2 => Self::Six,
            1 => Self::Seven,
            0 => Self::Eight,
            _ => unreachable!(),
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char((b'1' + *self as u8) as char)
    }
}

/// Files a to h. File a is column 0.
#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    const fn from_col(col: u8) -> Self {
        match col {
            0 => Self::A,
            1 => Self::B,
            2 => Self::C,
            3 => Self::D,
            4 => Self::E,
            5 => Self::F,
            6 => Self::G,
            7 => Self::H,
            _ => unreachable!(),
        }
    }
}

impl Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

/// A board coordinate. Row 0 is black's back rank, row 7 is white's.
///
/// A `Square` is always on the board; off-board coordinates only ever exist
/// as the `None` result of [`Square::offset`] and friends.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Square {
    row: u8,
    col: u8,
}

macro_rules! step {
    ($dir:ident, $d_row:expr, $d_col:expr) => {
        pub const fn $dir(self) -> Option<Square> {
            self.offset($d_row, $d_col)
        }
    };
    ($dir1:ident, $dir2:ident, $d_row:expr, $d_col:expr) => {
        paste! {
            pub const fn [<$dir1 _ $dir2>](self) -> Option<Square> {
                self.offset($d_row, $d_col)
            }
        }
    };
}

impl Square {
    /// Panics if either coordinate is off the board.
    pub const fn new(row: u8, col: u8) -> Square {
        assert!(row < BOARD_DIM && col < BOARD_DIM, "square off the board");

        Self { row, col }
    }

    pub const fn from_row_col(row: i8, col: i8) -> Option<Square> {
        if row < 0 || col < 0 || row >= BOARD_DIM as i8 || col >= BOARD_DIM as i8 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Self::from_row_col(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    step!(north, -1, 0);
    step!(south, 1, 0);
    step!(east, 0, 1);
    step!(west, 0, -1);
    step!(north, east, -1, 1);
    step!(north, west, -1, -1);
    step!(south, east, 1, 1);
    step!(south, west, 1, -1);

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn from_idx(idx: u8) -> Option<Square> {
        if idx >= BOARD_DIM * BOARD_DIM {
            None
        } else {
            Some(Self {
                row: idx / BOARD_DIM,
                col: idx % BOARD_DIM,
            })
        }
    }

    /// Row-major index, 0 for a8 up to 63 for h1.
    pub const fn to_idx(self) -> u8 {
        self.row * BOARD_DIM + self.col
    }

    pub const fn from_rank_file(rank: Rank, file: File) -> Square {
        Self {
            row: rank.to_row(),
            col: file as u8,
        }
    }

    pub const fn to_rank_file(self) -> (Rank, File) {
        (Rank::from_row(self.row), File::from_col(self.col))
    }

    /// Every square in row-major order, starting at row 0, column 0.
    pub fn iter_all_squares() -> AllSquareIter {
        AllSquareIter { idx: 0 }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rank, file) = self.to_rank_file();
        write!(f, "{file}{rank}")
    }
}

impl Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self} ({}, {})", self.row, self.col)
    }
}

pub struct AllSquareIter {
    idx: u8,
}

impl Iterator for AllSquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let ret = Square::from_idx(self.idx);

        if ret.is_some() {
            self.idx += 1;
        }

        ret
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::{File, Rank, Square};

    #[test]
    fn idx_to_rf_to_idx_eq() {
        for idx in 0..64 {
            let s = Square::from_idx(idx).unwrap();
            let (rank, file) = s.to_rank_file();
            let s2 = Square::from_rank_file(rank, file);

            assert_eq!(s, s2);
            assert_eq!(s.to_idx(), idx);
        }

        assert!(Square::from_idx(64).is_none());
    }

    #[test]
    fn row_col_layout() {
        assert_eq!(sq!(a 8), Square::new(0, 0));
        assert_eq!(sq!(h 8), Square::new(0, 7));
        assert_eq!(sq!(a 1), Square::new(7, 0));
        assert_eq!(sq!(e 2), Square::new(6, 4));
        assert_eq!(sq!(d 5), Square::new(3, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Square::new(6, 4).to_string(), "e2");
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
    }

    #[test]
    #[should_panic]
    fn off_board_row() {
        Square::new(8, 0);
    }

    #[test]
    #[should_panic]
    fn off_board_col() {
        Square::new(0, 8);
    }

    #[test]
    fn from_row_col_bounds() {
        assert!(Square::from_row_col(-1, 0).is_none());
        assert!(Square::from_row_col(0, -1).is_none());
        assert!(Square::from_row_col(8, 3).is_none());
        assert!(Square::from_row_col(3, 8).is_none());
        assert_eq!(Square::from_row_col(7, 7), Some(Square::new(7, 7)));
    }

    #[test]
    fn row_major_iteration() {
        let squares: Vec<_> = Square::iter_all_squares().collect();

        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[1], Square::new(0, 1));
        assert_eq!(squares[8], Square::new(1, 0));
        assert_eq!(squares[63], Square::new(7, 7));
    }

    #[test]
    fn east_boundary() {
        for rank in Rank::iter() {
            let s = Square::from_rank_file(rank, File::H);
            assert!(s.east().is_none());
            assert!(s.north_east().is_none());
            assert!(s.south_east().is_none());
        }
    }

    #[test]
    fn east_move() {
        for (f1, f2) in File::iter().tuple_windows() {
            for rank in Rank::iter() {
                let s = Square::from_rank_file(rank, f1);
                let (new_rank, new_file) = s.east().unwrap().to_rank_file();
                assert_eq!(new_rank, rank);
                assert_eq!(new_file, f2);
            }
        }
    }

    #[test]
    fn west_boundary() {
        for rank in Rank::iter() {
            let s = Square::from_rank_file(rank, File::A);
            assert!(s.west().is_none());
            assert!(s.north_west().is_none());
            assert!(s.south_west().is_none());
        }
    }

    #[test]
    fn south_boundary() {
        for file in File::iter() {
            let s = Square::from_rank_file(Rank::One, file);
            assert!(s.south().is_none());
        }
    }

    #[test]
    fn north_move() {
        for (r1, r2) in Rank::iter().tuple_windows() {
            for file in File::iter() {
                let s = Square::from_rank_file(r1, file);
                let (new_rank, new_file) = s.north().unwrap().to_rank_file();
                assert_eq!(new_rank, r2);
                assert_eq!(new_file, file);
                assert_eq!(s.north().unwrap().row() + 1, s.row());
            }
        }
    }

    #[test]
    fn north_boundary() {
        for file in File::iter() {
            let s = Square::from_rank_file(Rank::Eight, file);
            assert!(s.north().is_none());
        }
    }
}
