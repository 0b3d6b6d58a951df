use crate::position::square::Square;

use super::{rays::Direction, MoveGen};

const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

impl MoveGen<'_> {
    // No castling, and squares attacked by the opponent are not excluded.
    pub fn calc_king_moves(&mut self, src: Square) {
        self.leap(src, &KING_OFFSETS);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        piece::{mkp, Colour},
        position::{
            builder::PositionBuilder,
            movegen::{test::mk_test, MoveGen},
            square::sq,
        },
    };

    #[test]
    fn may_step_into_attack() {
        let pos = PositionBuilder::new()
            .with_piece_at(mkp!(White, King), sq!(e 1))
            .with_piece_at(mkp!(Black, Rook), sq!(a 2))
            .with_next_turn(Colour::White)
            .build();
        let mut mgen = MoveGen::new(&pos);

        mgen.calc_king_moves(sq!(e 1));

        assert_eq!(mgen.moves.len(), 5);
        assert!(mgen.moves.iter().any(|m| m.dst == sq!(e 2)));
    }

    mk_test!(name=simple,
             calc_fn=calc_king_moves,
             kind=King,
             src=sq!(d 4),
             blockers=;
             attacks=;
             moves=sq!(d 5),
                   sq!(e 5),
                   sq!(c 5),
                   sq!(d 3),
                   sq!(e 3),
                   sq!(c 3),
                   sq!(e 4),
                   sq!(c 4));

    mk_test!(name=blockers,
             calc_fn=calc_king_moves,
             kind=King,
             src=sq!(d 4),
             blockers=sq!(c 5), sq!(d 5), sq!(c 4);
             attacks=;
             moves=sq!(e 5),
                   sq!(d 3),
                   sq!(e 3),
                   sq!(c 3),
                   sq!(e 4));

    mk_test!(name=attacks,
             calc_fn=calc_king_moves,
             kind=King,
             src=sq!(d 4),
             blockers=sq!(c 5), sq!(d 5), sq!(c 4);
             attacks=sq!(c 3), sq!(e 3), sq!(d 3);
             moves=sq!(e 5),
                   sq!(e 4));

    mk_test!(name=corner,
             calc_fn=calc_king_moves,
             kind=King,
             src=sq!(a 8),
             blockers=;
             attacks=;
             moves=sq!(b 8),
                   sq!(b 7),
                   sq!(a 7));
}
