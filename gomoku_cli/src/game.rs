use anyhow::Context;
use gomoku::{Board, Piece};
use tracing::{debug, info};

use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won { piece: Piece },
    /// The board filled up without a winner.
    Draw,
    /// A player quit before the game was decided.
    Abandoned,
}

/// Plays one game on a fresh board and returns the result together with the final board.
///
/// `players[0]` plays black and moves first. Every placement is passed on to the
/// other player before it is asked for its move. Returns an error on I/O failure or
/// when a player picks a position the board rejects.
pub fn play_game(
    board_size: usize,
    mut players: [&mut dyn Player; 2],
) -> anyhow::Result<(GameResult, Board)> {
    anyhow::ensure!(
        players[0].piece() == Piece::Black && players[1].piece() == Piece::White,
        "The first player must play black and the second one white"
    );

    let mut board = Board::new(board_size);
    let mut current_player_idx = 0;
    loop {
        let current_player = &mut players[current_player_idx];
        let Some(pos) = current_player.next_move(&board)? else {
            info!(player = current_player.name(), "Player quit");
            return Ok((GameResult::Abandoned, board));
        };
        let piece = current_player.piece();
        let winner = board
            .place(piece, pos)
            .with_context(|| format!("{} played an illegal move", current_player.name()))?;
        debug!("{} {}", piece, pos);

        if let Some(piece) = winner {
            info!("{} won!", piece);
            return Ok((GameResult::Won { piece }, board));
        }
        if board.is_full() {
            info!("Draw, the board is full");
            return Ok((GameResult::Draw, board));
        }

        current_player_idx = 1 - current_player_idx;
        players[current_player_idx].observe_opponent_move(pos);
    }
}
