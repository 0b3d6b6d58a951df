use crate::{
    mmove::{Move, MoveBuilder, NeedsDst},
    piece::{Colour, PieceKind},
};

use super::{square::Square, Position};

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rays;
mod rook;


pub type MoveList = Vec<Move>;

/// Collects the pseudo-legal moves of one side. The position is only read.
pub struct MoveGen<'a> {
    moves: MoveList,
    position: &'a Position,
}

impl<'a> MoveGen<'a> {
    pub fn new(position: &'a Position) -> Self {
        Self {
            moves: Vec::with_capacity(64),
            position,
        }
    }

    pub fn gen(mut self) -> MoveList {
        let pos = self.position;
        let colour = pos.to_play();

        for (src, piece) in pos.board().iter_pieces() {
            if piece.colour() != colour {
                continue;
            }

            match piece.kind() {
                PieceKind::Pawn => self.calc_pawn_moves(src),
                PieceKind::Rook => self.calc_rook_moves(src),
                PieceKind::Knight => self.calc_knight_moves(src),
                PieceKind::Bishop => self.calc_bishop_moves(src),
                PieceKind::Queen => self.calc_queen_moves(src),
                PieceKind::King => self.calc_king_moves(src),
            }
        }

        self.moves
    }

    fn to_play(&self) -> Colour {
        self.position.to_play()
    }

    /// Builder for moves starting on `src`, snapshotting the piece there.
    fn builder(&self, src: Square) -> Option<MoveBuilder<NeedsDst>> {
        self.position
            .piece_at(src)
            .map(|piece| MoveBuilder::new(piece, src))
    }

    /// Per-move leaf counts `depth` plies below `pos`.
    pub fn perft(pos: &mut Position, depth: u32) -> Vec<(Move, u64)> {
        fn _perft(pos: &mut Position, depth: u32) -> u64 {
            if depth == 0 {
                return 1;
            }

            let mut n = 0;

            for m in MoveGen::new(pos).gen() {
                pos.make_move(m);
                n += _perft(pos, depth - 1);
                pos.undo_move();
            }

            n
        }

        if depth == 0 {
            return Vec::new();
        }

        let moves = MoveGen::new(pos).gen();

        moves
            .into_iter()
            .map(|m| {
                pos.make_move(m);
                let x = _perft(pos, depth - 1);
                pos.undo_move();
                (m, x)
            })
            .collect()
    }
}

impl Position {
    pub fn perft(&mut self, depth: u32) -> Vec<(Move, u64)> {
        MoveGen::perft(self, depth)
    }
}
