use quickcheck::{Arbitrary, Gen};

use crate::{Piece, Position};

/// A small board and the cells a human tries to play on it, in order.
///
/// Moves can repeat or hit cells the evaluator already took, so callers have to
/// check them before placing.
#[derive(Clone, Debug)]
pub struct HumanMoves {
    pub size: usize,
    pub seed: u64,
    pub moves: Vec<Position>,
}

impl Arbitrary for HumanMoves {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = 5 + usize::arbitrary(g) % 5;
        let moves = Vec::<(u8, u8)>::arbitrary(g)
            .into_iter()
            .map(|(x, y)| {
                Position::new(
                    i32::from(x) % size as i32,
                    i32::from(y) % size as i32,
                )
            })
            .collect();
        HumanMoves {
            size,
            seed: u64::arbitrary(g),
            moves,
        }
    }
}

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Piece::Black, Piece::White]).unwrap()
    }
}
