use crate::position::square::Square;

use super::{rays::Step, MoveGen};

const ROOK_RAYS: [Step; 4] = [Square::north, Square::west, Square::south, Square::east];

impl MoveGen<'_> {
    pub fn calc_rook_moves(&mut self, src: Square) {
        self.slide(src, &ROOK_RAYS);
    }
}
