use crate::{Piece, Position};

/// The error type for [`Board::place()`](crate::Board::place).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { pos: Position },
    Occupied { pos: Position, by: Piece },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { pos } => {
                write!(f, "Piece was placed at {}, outside of the board", pos)
            }
            IllegalPlacement::Occupied { pos, by } => write!(
                f,
                "Piece was placed at {}, which is already occupied by {}",
                pos, by
            ),
        }
    }
}

/// The error type for [`check_board_size()`](crate::check_board_size).
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidBoardSize {
    pub size: usize,
}

impl std::error::Error for InvalidBoardSize {}

impl std::fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board size {} is not supported, it must be between 1 and {}",
            self.size,
            crate::MAX_BOARD_SIZE
        )
    }
}

/// The error type for [`Evaluator::choose_move()`](crate::Evaluator::choose_move)
/// when there is no empty cell left.
#[derive(Debug, PartialEq, Eq)]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}

impl std::fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No legal move, the board is full")
    }
}
