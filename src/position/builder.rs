use crate::piece::{Colour, Piece};

use super::{square::Square, Position};

/// Builds arbitrary positions, starting from an empty board with white to
/// move and an empty move log.
pub struct PositionBuilder {
    pos: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    pub fn new() -> Self {
        Self {
            pos: Position::empty(),
        }
    }

    pub fn with_next_turn(mut self, colour: Colour) -> Self {
        self.pos.set_to_play(colour);

        self
    }

    /// Place `p` on `sq`, replacing anything already there.
    pub fn with_piece_at(mut self, p: Piece, sq: Square) -> Self {
        self.pos.set_piece(sq, Some(p));

        self
    }

    pub fn build(self) -> Position {
        self.pos
    }
}
