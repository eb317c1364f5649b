mod grid;

pub use grid::*;

use crate::{Cell, IllegalPlacement, Piece};

/// Side length of the classic board.
pub const BOARD_SIZE: usize = 19;

/// Largest supported side length.
pub const MAX_BOARD_SIZE: usize = 100;

/// How many pieces in a row win the game. Longer lines win too.
pub const WIN_LENGTH: usize = 5;

/// The four line directions: horizontal, vertical, diagonal and anti-diagonal.
///
/// Every check walks each of them both ways, so the opposite directions are covered too.
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// The authoritative game state.
///
/// Pieces are only ever added, never removed or moved. A new game starts from a
/// new board.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// Panics if [`check_board_size()`] rejects `size`.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read-only view of the cells, e.g. for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether `pos` is on the board and free.
    pub fn can_place(&self, pos: Position) -> bool {
        self.grid.get(pos) == Some(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Places `piece` at `pos` and returns the winner, if this placement completes
    /// a line of at least [`WIN_LENGTH`] pieces through `pos`.
    ///
    /// Placing on a cell for which [`Self::can_place()`] is false is rejected and
    /// leaves the board untouched.
    pub fn place(
        &mut self,
        piece: Piece,
        pos: Position,
    ) -> Result<Option<Piece>, IllegalPlacement> {
        match self.grid.get(pos) {
            None => return Err(IllegalPlacement::OutOfBounds { pos }),
            Some(Cell::Occupied(by)) => return Err(IllegalPlacement::Occupied { pos, by }),
            Some(Cell::Empty) => {}
        }
        self.grid.set(pos, Cell::Occupied(piece));

        let won = DIRECTIONS
            .into_iter()
            .any(|dir| self.line_length(pos, piece, dir) >= WIN_LENGTH);
        Ok(won.then_some(piece))
    }

    // Internal helper to count the pieces in the line through `pos`, looking at most
    // WIN_LENGTH - 1 cells each way.
    fn line_length(&self, pos: Position, piece: Piece, dir: (i32, i32)) -> usize {
        let mut count = 1;
        for sign in [1, -1] {
            for step in 1..WIN_LENGTH as i32 {
                if self.grid.get(pos.offset(dir, sign * step)) == Some(Cell::Occupied(piece)) {
                    count += 1;
                } else {
                    break;
                }
            }
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn line(start: Position, dir: (i32, i32), len: i32) -> Vec<Position> {
        (0..len).map(|step| start.offset(dir, step)).collect()
    }

    quickcheck! {
        fn can_place_iff_in_bounds(x: i8, y: i8) -> bool {
            let board = Board::new(7);
            let in_bounds = (0..7).contains(&x) && (0..7).contains(&y);
            board.can_place(Position::new(i32::from(x), i32::from(y))) == in_bounds
        }

        fn alternating_line_never_wins(dir_idx: u8, first: Piece) -> bool {
            let dir = DIRECTIONS[usize::from(dir_idx) % 4];
            // The anti-diagonal goes up, so it starts in the bottom row.
            let start = if dir.1 < 0 { Position::new(0, 8) } else { Position::new(0, 0) };
            let mut board = Board::new(9);
            let mut piece = first;
            for pos in line(start, dir, 9) {
                if board.place(piece, pos) != Ok(None) {
                    return false;
                }
                piece = piece.opponent();
            }
            true
        }
    }

    #[test]
    fn five_in_a_row_in_every_direction() {
        for dir in DIRECTIONS {
            let mut board = Board::new(15);
            let positions = line(Position::new(7, 7), dir, 5);
            for &pos in &positions[..4] {
                assert_eq!(board.place(Piece::Black, pos), Ok(None), "{:?}", dir);
            }
            assert_eq!(board.place(Piece::Black, positions[4]), Ok(Some(Piece::Black)));
        }
    }

    #[test]
    fn completing_the_middle_wins() {
        let mut board = Board::default();
        let positions = line(Position::new(3, 10), (1, -1), 5);
        for i in [0, 1, 3, 4] {
            assert_eq!(board.place(Piece::White, positions[i]), Ok(None));
        }
        assert_eq!(board.place(Piece::White, positions[2]), Ok(Some(Piece::White)));
    }

    #[test]
    fn overlong_line_wins() {
        let mut board = Board::default();
        let positions = line(Position::new(0, 4), (1, 0), 6);
        for i in [0, 1, 2, 4, 5] {
            assert_eq!(board.place(Piece::Black, positions[i]), Ok(None));
        }
        assert_eq!(board.place(Piece::Black, positions[3]), Ok(Some(Piece::Black)));
    }

    #[test]
    fn line_along_the_edge_wins() {
        let mut board = Board::new(5);
        let positions = line(Position::new(4, 0), (0, 1), 5);
        for &pos in &positions[..4] {
            assert_eq!(board.place(Piece::White, pos), Ok(None));
        }
        assert_eq!(board.place(Piece::White, positions[4]), Ok(Some(Piece::White)));
    }

    #[test]
    fn four_and_an_opponent_piece_do_not_win() {
        let mut board = Board::default();
        let positions = line(Position::new(2, 2), (1, 1), 5);
        for &pos in &positions[..4] {
            assert_eq!(board.place(Piece::Black, pos), Ok(None));
        }
        assert_eq!(board.place(Piece::White, positions[4]), Ok(None));
    }

    #[test]
    fn rejects_illegal_placements() {
        let mut board = Board::new(5);
        let pos = Position::new(1, 2);
        assert!(board.can_place(pos));
        assert_eq!(board.place(Piece::Black, pos), Ok(None));
        assert!(!board.can_place(pos));
        assert_eq!(
            board.place(Piece::White, pos),
            Err(IllegalPlacement::Occupied {
                pos,
                by: Piece::Black
            })
        );
        assert_eq!(board.grid().get(pos), Some(Cell::Occupied(Piece::Black)));

        for pos in [Position::new(5, 0), Position::new(0, -1), Position::new(-3, 7)] {
            assert!(!board.can_place(pos));
            assert_eq!(
                board.place(Piece::White, pos),
                Err(IllegalPlacement::OutOfBounds { pos })
            );
        }
    }

    #[test]
    fn full_board() {
        let mut board = Board::new(2);
        for (i, pos) in board.grid().positions().collect::<Vec<_>>().into_iter().enumerate() {
            assert!(!board.is_full());
            let piece = if i % 2 == 0 { Piece::Black } else { Piece::White };
            assert_eq!(board.place(piece, pos), Ok(None));
        }
        assert!(board.is_full());
    }
}
