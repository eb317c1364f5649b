use crate::{Cell, Grid};

/// Renders the grid as text, with column numbers on top and row numbers on the left.
pub fn visualize_grid(grid: &Grid) -> String {
    let mut result = String::from("     ");
    for x in 0..grid.size() {
        result += &format!("{:<2}", x % 100);
    }
    result += "\n    ╭";
    for _ in 0..grid.size() {
        result += "──";
    }
    result += "╮\n";

    for (y, row) in grid.rows().enumerate() {
        result += &format!("{:>3} │", y);
        for cell in row {
            let c = match cell {
                Cell::Empty => '·',
                Cell::Occupied(piece) => piece.unicode_char(),
            };
            result.push(c);
            result.push(' ');
        }
        result += "│\n";
    }

    result += "    ╰";
    for _ in 0..grid.size() {
        result += "──";
    }
    result += "╯";
    result
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&visualize_grid(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Piece, Position};

    #[test]
    fn small_board() {
        let mut board = Board::new(3);
        board.place(Piece::Black, Position::new(0, 0)).unwrap();
        board.place(Piece::White, Position::new(2, 1)).unwrap();
        let expected = "     0 1 2 \n    ╭──────╮\n  0 │● · · │\n  1 │· · ○ │\n  2 │· · · │\n    ╰──────╯";
        assert_eq!(visualize_grid(board.grid()), expected);
        assert_eq!(board.grid().to_string(), expected);
    }
}
