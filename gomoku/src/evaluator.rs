use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::board::DIRECTIONS;
use crate::{Cell, Grid, NoLegalMove, Piece, Position};

/// How many cells a run is followed from the candidate cell, each way.
const WALK_STEPS: i32 = 5;

/// How many cells ahead are looked at to decide which side a direction belongs to.
const LOOKAHEAD_STEPS: i32 = 2;

/// The automated opponent.
///
/// It scores every empty cell with a local heuristic (no search) and plays the best one.
///
/// The evaluator does not look at the [`Board`](crate::Board). It keeps its own grid,
/// which has to be told about every opponent move through
/// [`Self::record_opponent_move()`]; its own moves are written by
/// [`Self::choose_move()`]. As long as both are done for every placement, the
/// evaluator's grid is identical to the board's.
///
/// The random source is only used to break ties between equally good moves.
#[derive(Clone, Debug)]
pub struct Evaluator<R = StdRng> {
    piece: Piece,
    grid: Grid,
    rng: R,
}

/// Which side a line direction was classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Own,
    Opponent,
}

/// Whether a single empty cell has been stepped over inside a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Gap {
    #[default]
    Unseen,
    /// One empty cell was passed, but no stone of the run followed it (yet).
    Pending,
    /// An empty cell with a stone of the run behind it.
    Seen,
}

/// What was found for one side along one line through the candidate cell.
#[derive(Clone, Copy, Debug, Default)]
struct Run {
    len: u32,
    blocked_ends: u32,
    gap: Gap,
}

impl Evaluator<StdRng> {
    pub fn seeded(size: usize, piece: Piece, seed: u64) -> Self {
        Self::new(size, piece, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Evaluator<R> {
    /// Creates an evaluator playing `piece` on an empty `size` x `size` grid.
    ///
    /// Panics if [`check_board_size()`](crate::check_board_size) rejects `size`.
    pub fn new(size: usize, piece: Piece, rng: R) -> Self {
        Self {
            piece,
            grid: Grid::new(size),
            rng,
        }
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The evaluator's own copy of the cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mirrors an opponent placement that was already accepted by the board.
    ///
    /// There is no validation: `pos` is expected to be on the grid and empty.
    pub fn record_opponent_move(&mut self, pos: Position) {
        debug_assert_eq!(self.grid.get(pos), Some(Cell::Empty), "{}", pos);
        self.grid.set(pos, Cell::Occupied(self.piece.opponent()));
    }

    /// Picks the empty cell with the highest score and claims it in the own grid.
    ///
    /// Cells are visited in row-major order. Among cells with the same positive
    /// score, each later one replaces the current pick with probability 1/2. If every
    /// score is zero, the first empty cell is chosen.
    pub fn choose_move(&mut self) -> Result<Position, NoLegalMove> {
        let mut best: Option<(Position, f64)> = None;
        for pos in self.grid.positions() {
            if self.grid.get(pos) != Some(Cell::Empty) {
                continue;
            }
            let score = self.score(pos);
            let replace = match best {
                None => true,
                Some((_, best_score)) => {
                    score > best_score
                        || (score == best_score && score > 0.0 && self.rng.gen_bool(0.5))
                }
            };
            if replace {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(NoLegalMove)?;
        debug!(piece = %self.piece, %pos, score, "Chose move");
        self.grid.set(pos, Cell::Occupied(self.piece));
        Ok(pos)
    }

    /// How desirable it is for this evaluator to place a piece at `pos`.
    ///
    /// This is the sum of the scores of the four lines through `pos`, so a cell that
    /// extends several lines at once is rewarded for each of them.
    pub fn score(&self, pos: Position) -> f64 {
        let score: f64 = DIRECTIONS
            .into_iter()
            .map(|dir| self.direction_score(pos, dir))
            .sum();
        trace!(%pos, score);
        score
    }

    fn direction_score(&self, pos: Position, (dx, dy): (i32, i32)) -> f64 {
        let mut own = Run::default();
        let mut opponent = Run::default();

        // Both halves of the line add to the same per-side totals.
        for dir in [(dx, dy), (-dx, -dy)] {
            let stopped_by_stone = match self.classify(pos, dir) {
                Some(Side::Own) => own.walk(&self.grid, pos, dir, self.piece),
                Some(Side::Opponent) => {
                    opponent.walk(&self.grid, pos, dir, self.piece.opponent())
                }
                None => false,
            };
            // A stone ending either walk is charged to the opponent's run.
            if stopped_by_stone {
                opponent.blocked_ends += 1;
            }
        }

        let score = f64::from(tier_score(&own, &opponent));
        if own.gap == Gap::Seen || opponent.gap == Gap::Seen {
            score / 2.0
        } else {
            score
        }
    }

    // The first stone within LOOKAHEAD_STEPS decides the side. An empty cell is
    // stepped over, anything off the board ends the search.
    fn classify(&self, pos: Position, dir: (i32, i32)) -> Option<Side> {
        for step in 1..=LOOKAHEAD_STEPS {
            match self.grid.get(pos.offset(dir, step))? {
                Cell::Empty => {}
                Cell::Occupied(piece) if piece == self.piece => return Some(Side::Own),
                Cell::Occupied(_) => return Some(Side::Opponent),
            }
        }
        None
    }
}

impl Run {
    // Follows the stones of `piece` away from `from`, tolerating a single empty cell.
    // Returns whether the walk ended at a stone of the other piece. Steps past the
    // edge of the grid are blocked ends of this run, one per step.
    fn walk(&mut self, grid: &Grid, from: Position, dir: (i32, i32), piece: Piece) -> bool {
        let mut stopped_by_stone = false;
        for step in 1..=WALK_STEPS {
            match grid.get(from.offset(dir, step)) {
                Some(Cell::Occupied(p)) if p == piece => {
                    self.len += 1;
                    if self.gap == Gap::Pending {
                        self.gap = Gap::Seen;
                    }
                }
                Some(Cell::Empty) if self.gap == Gap::Unseen => self.gap = Gap::Pending,
                Some(Cell::Empty) => break,
                Some(Cell::Occupied(_)) => {
                    stopped_by_stone = true;
                    break;
                }
                None => self.blocked_ends += 1,
            }
        }
        // A trailing empty cell is not a gap.
        if self.gap == Gap::Pending {
            self.gap = Gap::Unseen;
        }
        stopped_by_stone
    }
}

// Own runs are checked before opponent runs of the same length, longer runs first.
fn tier_score(own: &Run, opponent: &Run) -> u32 {
    match (own.len, opponent.len) {
        (4, _) => 10000,
        (_, 4) => 9000,
        (3, _) => by_blocked_ends(own, 1000, 100),
        (_, 3) => by_blocked_ends(opponent, 900, 90),
        (2, _) => by_blocked_ends(own, 100, 10),
        (_, 2) => by_blocked_ends(opponent, 90, 9),
        (1, _) => 10,
        (_, 1) => 9,
        _ => 0,
    }
}

fn by_blocked_ends(run: &Run, open: u32, half_open: u32) -> u32 {
    match run.blocked_ends {
        0 => open,
        1 => half_open,
        _ => 0,
    }
}
