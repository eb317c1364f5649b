use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two sides.
///
/// The discriminant doubles as the tag that identifies the side in a grid cell,
/// see [`Piece::tag()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Black = 1,
    White = 2,
}

impl Piece {
    /// The numeric value stored for this piece. Never 0, which is reserved for empty cells.
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::Black => "Black",
            Piece::White => "White",
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
        }
    }

    pub fn unicode_char(self) -> char {
        match self {
            Piece::Black => '●',
            Piece::White => '○',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error type for parsing a [`Piece`] from a string.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsePieceError(String);

impl std::error::Error for ParsePieceError {}

impl std::fmt::Display for ParsePieceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown piece '{}', expected \"black\" or \"white\"", self.0)
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Piece::Black),
            "white" | "w" => Ok(Piece::White),
            _ => Err(ParsePieceError(String::from(s))),
        }
    }
}

/// The content of a single position on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    /// 0 for an empty cell, otherwise the tag of the occupying piece.
    pub fn tag(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(piece) => piece.tag(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}
