use anyhow::{anyhow, bail, Context, Result};
use nom::Finish;

use crate::{
    parsers::fen::{parse_fen, Fen, FenElement},
    piece::Colour,
};

use super::{
    builder::PositionBuilder,
    square::{Square, BOARD_DIM},
    Position,
};

impl TryFrom<Fen> for Position {
    type Error = anyhow::Error;

    fn try_from(fen: Fen) -> Result<Self> {
        if fen.board.len() != BOARD_DIM as usize {
            bail!("Invalid number of ranks in FEN string");
        }

        let mut pos = PositionBuilder::new();

        // FEN lists rank 8 first, which is row 0.
        for (row, elms) in fen.board.iter().enumerate() {
            let mut col = 0u8;

            for elm in elms.iter() {
                match elm {
                    FenElement::Piece(p) => {
                        if col >= BOARD_DIM {
                            bail!("Too many pieces in FEN rank specification");
                        }
                        pos = pos.with_piece_at(*p, Square::new(row as u8, col));
                        col += 1;
                    }
                    FenElement::Space(n) => col = col.saturating_add(*n),
                }
            }

            if col > BOARD_DIM {
                bail!("Too many pieces in FEN rank specification");
            }

            if col < BOARD_DIM {
                bail!("Too few pieces/spaces on rank");
            }
        }

        Ok(pos.with_next_turn(fen.colour).build())
    }
}

impl Position {
    pub fn from_fen(fen: impl AsRef<str>) -> Result<Self> {
        let fen = fen.as_ref();
        let (_, parsed) = parse_fen(fen)
            .finish()
            .map_err(|e| anyhow!("Could not parse FEN: {e}"))?;

        Position::try_from(parsed).with_context(|| format!("Invalid FEN '{}'", fen.trim()))
    }

    /// Placement and side to move, with empty castling/en passant fields
    /// and zeroed clocks.
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(BOARD_DIM as usize);

        for row in 0..BOARD_DIM {
            let mut rank = String::new();
            let mut spaces = 0;

            for col in 0..BOARD_DIM {
                match self.piece_at(Square::new(row, col)) {
                    Some(p) => {
                        if spaces > 0 {
                            rank.push_str(&spaces.to_string());
                            spaces = 0;
                        }

                        let c = p.kind().to_token_char().to_ascii_lowercase();
                        rank.push(if p.colour() == Colour::White {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        });
                    }
                    None => spaces += 1,
                }
            }

            if spaces > 0 {
                rank.push_str(&spaces.to_string());
            }

            ranks.push(rank);
        }

        format!("{} {} - - 0 1", ranks.join("/"), self.to_play().to_char())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        piece::{mkp, Colour},
        position::{square::sq, Position},
    };

    #[test]
    fn starting_pos() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();

        assert_eq!(result, Position::default());
    }

    #[test]
    fn empty() {
        let result = Position::from_fen("8/8/8/8/8/8/8/8 w KQkq - 0 1").unwrap();

        assert_eq!(result, Position::empty());
    }

    #[test]
    fn side_and_pieces() {
        let pos = Position::from_fen("4k3/8/8/8/3Q4/8/8/4K3 b - - 0 1").unwrap();

        assert_eq!(pos.to_play(), Colour::Black);
        assert_eq!(pos.piece_at(sq!(d 4)), Some(mkp!(White, Queen)));
        assert_eq!(pos.piece_at(sq!(e 8)), Some(mkp!(Black, King)));
        assert_eq!(pos.board().iter_pieces().count(), 3);
    }

    #[test]
    fn to_fen_round_trip() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b - - 0 1",
            "8/8/8/8/8/8/8/8 w - - 0 1",
        ];

        for fen in fens {
            assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    #[should_panic]
    fn too_many_pieces_on_rank() {
        Position::from_fen("6bpp/8/8/8/8/8/8/8 w KQkq - 0 1").unwrap();
    }

    #[test]
    #[should_panic]
    fn too_few_pieces_on_rank() {
        Position::from_fen("4bpp/8/8/8/8/8/8/8 w KQkq - 0 1").unwrap();
    }

    #[test]
    #[should_panic]
    fn too_many_ranks() {
        Position::from_fen("7p/8/8/8/8/8/8/8/p7 w KQkq - 0 1").unwrap();
    }

    #[test]
    #[should_panic]
    fn too_few_ranks() {
        Position::from_fen("7p/8/8/8/8/p7 w KQkq - 0 1").unwrap();
    }
}
