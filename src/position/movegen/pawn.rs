use crate::{piece::Colour, position::square::Square};

use super::{
    rays::{Step, Target},
    MoveGen,
};

/// Step towards the opponent's back rank.
fn forward(c: Colour) -> Step {
    match c {
        Colour::White => Square::north,
        Colour::Black => Square::south,
    }
}

/// Diagonal captures, file a side first.
fn captures(c: Colour) -> [Step; 2] {
    match c {
        Colour::White => [Square::north_west, Square::north_east],
        Colour::Black => [Square::south_west, Square::south_east],
    }
}

/// Row the side's pawns start on.
const fn home_row(c: Colour) -> u8 {
    match c {
        Colour::White => 6,
        Colour::Black => 1,
    }
}

impl MoveGen<'_> {
    // No promotion and no en passant.
    pub fn calc_pawn_moves(&mut self, src: Square) {
        let Some(builder) = self.builder(src) else {
            return;
        };
        let colour = self.to_play();
        let step = forward(colour);

        if let Some(one) = step(src) {
            if self.position.piece_at(one).is_none() {
                self.moves.push(builder.with_dst(one).build());

                if src.row() == home_row(colour) {
                    if let Some(two) = step(one) {
                        if self.position.piece_at(two).is_none() {
                            self.moves.push(builder.with_dst(two).build());
                        }
                    }
                }
            }
        }

        for diagonal in captures(colour) {
            let Some(dst) = diagonal(src) else {
                continue;
            };

            if let Target::Enemy(_) = self.target(dst) {
                self.push_unless_friendly(builder, dst);
            }
        }
    }
}
