use std::fmt::Display;

use itertools::Itertools;
use log::{debug, trace};
use strum::IntoEnumIterator;

use crate::{
    mmove::Move,
    piece::{mkp, Colour, Piece, PieceKind},
};

use self::{
    board::Board,
    movegen::{MoveGen, MoveList},
    square::{File, Rank, Square},
};

pub mod board;
pub mod builder;
pub mod eval;
pub mod fen;
pub mod movegen;
pub mod square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board, side to move and the log of applied moves.
#[derive(Clone, PartialEq)]
pub struct Position {
    board: Board,
    to_play: Colour,
    log: Vec<Move>,
}

impl Default for Position {
    /// The standard starting layout, white to move.
    fn default() -> Self {
        let mut board = Board::empty();

        for (file, kind) in File::iter().zip(BACK_RANK) {
            board[Square::from_rank_file(Rank::One, file)] = Some(Piece::new(kind, Colour::White));
            board[Square::from_rank_file(Rank::Two, file)] = Some(mkp!(White, Pawn));
            board[Square::from_rank_file(Rank::Seven, file)] = Some(mkp!(Black, Pawn));
            board[Square::from_rank_file(Rank::Eight, file)] = Some(Piece::new(kind, Colour::Black));
        }

        Self {
            board,
            to_play: Colour::White,
            log: Vec::new(),
        }
    }
}

impl Position {
    pub fn empty() -> Self {
        Self {
            board: Board::empty(),
            to_play: Colour::White,
            log: Vec::new(),
        }
    }

    pub fn to_play(&self) -> Colour {
        self.to_play
    }

    pub fn white_to_move(&self) -> bool {
        self.to_play == Colour::White
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq]
    }

    pub fn move_log(&self) -> &[Move] {
        &self.log
    }

    pub fn last_move(&self) -> Option<Move> {
        self.log.last().copied()
    }

    /// Apply a move generated against the current board.
    ///
    /// The move is trusted: callers accepting outside input must first check
    /// it is a member of [`Position::valid_moves`].
    pub fn make_move(&mut self, m: Move) {
        trace!("make {m:?}");

        self.board[m.src] = None;
        self.board[m.dst] = Some(m.piece);
        self.log.push(m);
        self.to_play = self.to_play.next();
    }

    /// Reverse the most recent move. Returns `None`, changing nothing, when
    /// the log is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = self.log.pop()?;

        trace!("undo {m:?}");

        self.board[m.src] = Some(m.piece);
        self.board[m.dst] = m.capture;
        self.to_play = self.to_play.next();

        Some(m)
    }

    /// Every pseudo-legal move for the side to move, in row-major square
    /// order and then each piece's own direction order.
    pub fn all_possible_moves(&self) -> MoveList {
        let moves = MoveGen::new(self).gen();

        debug!("{} moves for {:?}", moves.len(), self.to_play);

        moves
    }

    /// Moves the caller may accept.
    ///
    /// This is currently the same list as [`Position::all_possible_moves`]:
    /// moves leaving the mover's own king attacked are not removed.
    pub fn valid_moves(&self) -> MoveList {
        self.all_possible_moves()
    }

    /// Move log as numbered pairs: `1. e2e4 e7e5`, `2. g1f3`, ...
    pub fn move_log_text(&self) -> Vec<String> {
        self.log
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                let pair = pair.iter().map(Move::chess_notation).join(" ");
                format!("{}. {pair}", i + 1)
            })
            .collect()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.board.set(sq, piece);
    }

    pub(crate) fn set_to_play(&mut self, colour: Colour) {
        self.to_play = colour;
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Position")
            .field("board", &self.to_fen())
            .field("to_play", &self.to_play)
            .field("log", &self.log)
            .finish()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{:?} to move", self.to_play)
    }
}
