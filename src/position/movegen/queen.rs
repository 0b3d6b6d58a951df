use crate::position::square::Square;

use super::MoveGen;

impl MoveGen<'_> {
    /// Rook rays first, then bishop rays.
    pub fn calc_queen_moves(&mut self, src: Square) {
        self.calc_rook_moves(src);
        self.calc_bishop_moves(src);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        piece::mkp,
        position::{
            builder::PositionBuilder,
            movegen::{test::mk_test, MoveGen},
            square::sq,
        },
    };

    #[test]
    fn union_of_rook_and_bishop() {
        let pos = PositionBuilder::new()
            .with_piece_at(mkp!(White, Queen), sq!(c 4))
            .with_piece_at(mkp!(White, Pawn), sq!(e 6))
            .with_piece_at(mkp!(Black, Pawn), sq!(f 4))
            .build();

        let mut queen = MoveGen::new(&pos);
        queen.calc_queen_moves(sq!(c 4));

        let mut rook = MoveGen::new(&pos);
        rook.calc_rook_moves(sq!(c 4));
        let mut bishop = MoveGen::new(&pos);
        bishop.calc_bishop_moves(sq!(c 4));

        let mut expected = rook.moves;
        expected.extend(bishop.moves);

        assert_eq!(queen.moves, expected);
        assert!(queen.moves.iter().all(|m| m.piece == mkp!(White, Queen)));
    }

    mk_test!(name=simple,
             calc_fn=calc_queen_moves,
             kind=Queen,
             src=sq!(d 4),
             blockers=;
             attacks=;
             moves=sq!(c 5),
                   sq!(b 6),
                   sq!(a 7),
                   sq!(e 5),
                   sq!(f 6),
                   sq!(g 7),
                   sq!(h 8),
                   sq!(e 3),
                   sq!(f 2),
                   sq!(g 1),
                   sq!(c 3),
                   sq!(b 2),
                   sq!(a 1),
                   sq!(d 1),
                   sq!(d 2),
                   sq!(d 3),
                   sq!(d 5),
                   sq!(d 6),
                   sq!(d 7),
                   sq!(d 8),
                   sq!(a 4),
                   sq!(b 4),
                   sq!(c 4),
                   sq!(e 4),
                   sq!(f 4),
                   sq!(g 4),
                   sq!(h 4));

    mk_test!(name=blockers,
             calc_fn=calc_queen_moves,
             kind=Queen,
             src=sq!(d 4),
             blockers=sq!(f 4), sq!(f 6), sq!(b 2);
             attacks=;
             moves=sq!(c 5),
                   sq!(b 6),
                   sq!(a 7),
                   sq!(e 5),
                   sq!(e 3),
                   sq!(f 2),
                   sq!(g 1),
                   sq!(c 3),
                   sq!(d 1),
                   sq!(d 2),
                   sq!(d 3),
                   sq!(d 5),
                   sq!(d 6),
                   sq!(d 7),
                   sq!(d 8),
                   sq!(a 4),
                   sq!(b 4),
                   sq!(c 4),
                   sq!(e 4));

    mk_test!(name=attacks,
             calc_fn=calc_queen_moves,
             kind=Queen,
             src=sq!(d 4),
             blockers=sq!(f 4), sq!(f 6), sq!(b 2);
             attacks=sq!(b 4), sq!(b 6), sq!(d 6);
             moves=sq!(c 5),
                   sq!(e 5),
                   sq!(e 3),
                   sq!(f 2),
                   sq!(g 1),
                   sq!(c 3),
                   sq!(d 1),
                   sq!(d 2),
                   sq!(d 3),
                   sq!(d 5),
                   sq!(c 4),
                   sq!(e 4));
}
