use serde::{Deserialize, Serialize};

use crate::{Cell, InvalidBoardSize, MAX_BOARD_SIZE};

/// A coordinate pair: `x` is the column, `y` the row, both zero-based.
///
/// The coordinates are signed so that positions off the board (including
/// negative ones) can be represented and rejected instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position `steps` steps away along the direction `(dx, dy)`.
    pub(crate) fn offset(self, (dx, dy): (i32, i32), steps: i32) -> Self {
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Checks that a `size` x `size` grid is supported and returns its number of cells.
pub fn check_board_size(size: usize) -> Result<usize, InvalidBoardSize> {
    match size.checked_mul(size) {
        Some(num_cells) if (1..=MAX_BOARD_SIZE).contains(&size) => Ok(num_cells),
        _ => Err(InvalidBoardSize { size }),
    }
}

/// Dense storage for the cells of a square board.
//
// Row-major, i.e. the cell at (x, y) lives at index y * size + x.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of `size` x `size` empty cells.
    ///
    /// Panics if [`check_board_size()`] rejects `size`.
    pub fn new(size: usize) -> Self {
        let num_cells = match check_board_size(size) {
            Ok(num_cells) => num_cells,
            Err(err) => panic!("{}", err),
        };
        Self {
            size,
            cells: vec![Cell::Empty; num_cells],
        }
    }

    /// The number of cells along one side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `None` if `pos` is off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.size)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    // Writes outside of the grid are ignored, callers check bounds beforehand.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = cell;
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.size && y < self.size).then_some(y * self.size + x)
    }
}
