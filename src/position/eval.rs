use crate::piece::Colour;

use super::Position;

/// Material evaluation, in centipawns from white's point of view.
pub struct Evaluator<'a> {
    pos: &'a Position,
}

impl<'a> Evaluator<'a> {
    pub fn new(pos: &'a Position) -> Self {
        Self { pos }
    }

    pub fn material(&self, colour: Colour) -> i32 {
        self.pos
            .board()
            .iter_pieces()
            .filter(|(_, p)| p.colour() == colour)
            .map(|(_, p)| p.kind().score())
            .sum()
    }

    pub fn eval(pos: &Position) -> i32 {
        let e = Evaluator::new(pos);

        e.material(Colour::White) - e.material(Colour::Black)
    }

    /// Score relative to the side to move.
    pub fn eval_for_mover(pos: &Position) -> i32 {
        match pos.to_play() {
            Colour::White => Self::eval(pos),
            Colour::Black => -Self::eval(pos),
        }
    }
}
