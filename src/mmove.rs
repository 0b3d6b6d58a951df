use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{
    piece::Piece,
    position::{board::Board, square::Square},
};

/// A move from `src` to `dst`.
///
/// `piece` and `capture` are copies taken from the board when the move was
/// built, so undoing the move can restore whatever stood on `dst` even after
/// the board has changed.
#[derive(Clone, Copy)]
pub struct Move {
    pub src: Square,
    pub dst: Square,
    pub piece: Piece,
    pub capture: Option<Piece>,
}

impl Move {
    /// Snapshot the pieces on `src` and `dst`. `None` when `src` is empty,
    /// since there is nothing to move.
    pub fn from_board(src: Square, dst: Square, board: &Board) -> Option<Move> {
        let piece = board[src]?;
        let builder = MoveBuilder::new(piece, src).with_dst(dst);

        Some(match board[dst] {
            Some(captured) => builder.with_capture(captured).build(),
            None => builder.build(),
        })
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// File-rank of both squares, e.g. `e2e4`.
    pub fn chess_notation(&self) -> String {
        format!("{}{}", self.src, self.dst)
    }
}

/// Moves are identified by their coordinates alone.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.dst == other.dst
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.dst.hash(state);
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.src, self.dst)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {} -> {}", self.piece, self.src, self.dst)?;

        if let Some(capture) = self.capture {
            write!(f, " takes {capture:?}")?;
        }

        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct NeedsDst;

#[derive(Clone, Copy)]
pub struct HasDst;

#[derive(Clone, Copy)]
pub struct MoveBuilder<T: Clone + Copy> {
    piece: Piece,
    src: Square,
    dst: Option<Square>,
    capture: Option<Piece>,
    phantom: PhantomData<T>,
}

impl MoveBuilder<()> {
    pub fn new(piece: Piece, src: Square) -> MoveBuilder<NeedsDst> {
        MoveBuilder {
            piece,
            src,
            dst: None,
            capture: None,
            phantom: PhantomData,
        }
    }
}

impl MoveBuilder<NeedsDst> {
    pub fn with_dst(self, dst: Square) -> MoveBuilder<HasDst> {
        MoveBuilder {
            piece: self.piece,
            src: self.src,
            dst: Some(dst),
            capture: None,
            phantom: PhantomData,
        }
    }
}

impl MoveBuilder<HasDst> {
    pub fn build(self) -> Move {
        let Some(dst) = self.dst else {
            unreachable!("HasDst builder always carries a destination");
        };

        Move {
            piece: self.piece,
            src: self.src,
            dst,
            capture: self.capture,
        }
    }

    pub fn with_capture(mut self, piece: Piece) -> Self {
        self.capture = Some(piece);

        self
    }
}
