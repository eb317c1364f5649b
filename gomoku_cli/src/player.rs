use std::io::{BufRead, Write};

use gomoku::{Board, Evaluator, Piece, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Someone taking part in a game.
pub trait Player {
    fn name(&self) -> &str;

    fn piece(&self) -> Piece;

    /// Returns a position that `board` accepts, or `None` if the player quits.
    fn next_move(&mut self, board: &Board) -> anyhow::Result<Option<Position>>;

    /// Called after the other player's piece has been placed at `pos`.
    fn observe_opponent_move(&mut self, pos: Position);
}

/// A person at the terminal, entering moves as `x y`.
pub struct HumanPlayer<R, W> {
    pub name: String,
    piece: Piece,
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: String,
}

/// The automated opponent.
pub struct ComputerPlayer {
    pub name: String,
    evaluator: Evaluator,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: &str, piece: Piece, input: R, output: W) -> Self {
        Self {
            name: String::from(name),
            piece,
            input,
            output,
            buf: String::new(),
        }
    }

    /// Writes `question` and reads the answer, trimmed. Returns `None` on end of input.
    pub fn prompt(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.buf.clear();
        let num_bytes_read = self.input.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from(self.buf.trim())))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Piece {
        self.piece
    }

    fn next_move(&mut self, board: &Board) -> anyhow::Result<Option<Position>> {
        writeln!(self.output, "{}", board.grid())?;
        let question = format!(
            "{} ({}), enter a position as \"x y\" or q to quit: ",
            self.name, self.piece
        );
        loop {
            let Some(answer) = self.prompt(&question)? else {
                return Ok(None);
            };
            if matches!(answer.as_str(), "q" | "quit") {
                return Ok(None);
            }
            match parse_position(&answer) {
                Some(pos) if board.can_place(pos) => return Ok(Some(pos)),
                Some(pos) => writeln!(self.output, "Invalid point {}", pos)?,
                None => writeln!(self.output, "Could not read a position from '{}'", answer)?,
            }
        }
    }

    fn observe_opponent_move(&mut self, _pos: Position) {}
}

impl ComputerPlayer {
    /// Creates a player with a fresh evaluator, seeded from `rng`.
    pub fn new(name: &str, board_size: usize, piece: Piece, rng: &mut StdRng) -> Self {
        Self {
            name: String::from(name),
            evaluator: Evaluator::new(board_size, piece, StdRng::seed_from_u64(rng.gen())),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Piece {
        self.evaluator.piece()
    }

    fn next_move(&mut self, _board: &Board) -> anyhow::Result<Option<Position>> {
        let pos = self.evaluator.choose_move()?;
        trace!(player = &self.name, %pos, "Computer move");
        Ok(Some(pos))
    }

    fn observe_opponent_move(&mut self, pos: Position) {
        self.evaluator.record_opponent_move(pos);
    }
}

/// Parses a column and a row, separated by whitespace and/or a comma.
pub fn parse_position(s: &str) -> Option<Position> {
    let mut coords = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<i32>);
    let x = coords.next()?.ok()?;
    let y = coords.next()?.ok()?;
    if coords.next().is_some() {
        return None;
    }
    Some(Position::new(x, y))
}
