use crate::position::square::Square;

use super::{rays::Direction, MoveGen};

const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
];

impl MoveGen<'_> {
    pub fn calc_knight_moves(&mut self, src: Square) {
        self.leap(src, &KNIGHT_OFFSETS);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        piece::mkp,
        position::{
            builder::PositionBuilder,
            movegen::{test::mk_test, MoveGen},
            square::{sq, Square},
        },
    };

    #[test]
    fn corner() {
        let src = Square::new(0, 0);
        let pos = PositionBuilder::new()
            .with_piece_at(mkp!(White, Knight), src)
            .build();
        let mut mgen = MoveGen::new(&pos);

        mgen.calc_knight_moves(src);

        let dsts: Vec<_> = mgen.moves.iter().map(|m| m.dst).collect();
        assert_eq!(dsts, vec![Square::new(1, 2), Square::new(2, 1)]);
    }

    #[test]
    fn jumps_over_pieces() {
        let mut pos = PositionBuilder::new().with_piece_at(mkp!(White, Knight), sq!(d 4));

        for sq in [
            sq!(c 3),
            sq!(c 4),
            sq!(c 5),
            sq!(d 3),
            sq!(d 5),
            sq!(e 3),
            sq!(e 4),
            sq!(e 5),
        ] {
            pos = pos.with_piece_at(mkp!(White, Pawn), sq);
        }

        let pos = pos.build();
        let mut mgen = MoveGen::new(&pos);
        mgen.calc_knight_moves(sq!(d 4));

        assert_eq!(mgen.moves.len(), 8);
    }

    mk_test!(name=simple,
             calc_fn=calc_knight_moves,
             kind=Knight,
             src=sq!(d 4),
             blockers=;
             attacks=;
             moves=sq!(c 6),
                   sq!(e 6),
                   sq!(f 5),
                   sq!(f 3),
                   sq!(c 2),
                   sq!(e 2),
                   sq!(b 5),
                   sq!(b 3));

    mk_test!(name=blockers,
             calc_fn=calc_knight_moves,
             kind=Knight,
             src=sq!(d 4),
             blockers=sq!(c 6), sq!(f 3), sq!(d 5);
             attacks=;
             moves=sq!(e 6),
                   sq!(f 5),
                   sq!(c 2),
                   sq!(e 2),
                   sq!(b 5),
                   sq!(b 3));

    mk_test!(name=attacks,
             calc_fn=calc_knight_moves,
             kind=Knight,
             src=sq!(d 4),
             blockers=sq!(c 6), sq!(f 3);
             attacks=sq!(e 6), sq!(b 3);
             moves=sq!(f 5),
                   sq!(c 2),
                   sq!(e 2),
                   sq!(b 5));

    mk_test!(name=edge,
             calc_fn=calc_knight_moves,
             kind=Knight,
             src=sq!(h 4),
             blockers=;
             attacks=;
             moves=sq!(g 6),
                   sq!(g 2),
                   sq!(f 5),
                   sq!(f 3));
}
