use crate::position::square::Square;

use super::{rays::Step, MoveGen};

const BISHOP_RAYS: [Step; 4] = [
    Square::north_west,
    Square::north_east,
    Square::south_east,
    Square::south_west,
];

impl MoveGen<'_> {
    pub fn calc_bishop_moves(&mut self, src: Square) {
        self.slide(src, &BISHOP_RAYS);
    }
}
