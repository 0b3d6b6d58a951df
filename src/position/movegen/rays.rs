use crate::{
    mmove::{MoveBuilder, NeedsDst},
    piece::Piece,
    position::square::Square,
};

use super::MoveGen;

/// A (row, column) offset.
pub(super) type Direction = (i8, i8);

/// One step along a ray, e.g. [`Square::north`].
pub(super) type Step = fn(Square) -> Option<Square>;

#[derive(Clone, Copy, PartialEq, Debug)]
pub(super) enum Target {
    Empty,
    Enemy(Piece),
    Friendly,
}

impl MoveGen<'_> {
    pub(super) fn target(&self, dst: Square) -> Target {
        match self.position.piece_at(dst) {
            None => Target::Empty,
            Some(p) if p.colour() == self.to_play() => Target::Friendly,
            Some(p) => Target::Enemy(p),
        }
    }

    /// Record a move to `dst` unless a friendly piece stands there.
    pub(super) fn push_unless_friendly(
        &mut self,
        builder: MoveBuilder<NeedsDst>,
        dst: Square,
    ) -> Target {
        let target = self.target(dst);

        match target {
            Target::Empty => self.moves.push(builder.with_dst(dst).build()),
            Target::Enemy(p) => self.moves.push(builder.with_dst(dst).with_capture(p).build()),
            Target::Friendly => (),
        }

        target
    }

    /// Walk each ray from `src`, stopping at the edge, before a friendly
    /// piece, or on an enemy piece.
    pub(super) fn slide(&mut self, src: Square, rays: &[Step]) {
        let Some(builder) = self.builder(src) else {
            return;
        };

        for step in rays {
            let mut cur = src;

            while let Some(dst) = step(cur) {
                if self.push_unless_friendly(builder, dst) != Target::Empty {
                    break;
                }

                cur = dst;
            }
        }
    }

    /// Single steps to each offset. Intervening squares are not looked at.
    pub(super) fn leap(&mut self, src: Square, offsets: &[Direction]) {
        let Some(builder) = self.builder(src) else {
            return;
        };

        for &(d_row, d_col) in offsets {
            if let Some(dst) = src.offset(d_row, d_col) {
                self.push_unless_friendly(builder, dst);
            }
        }
    }
}
