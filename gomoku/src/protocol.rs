use serde::{Deserialize, Serialize};

use crate::{Piece, Position};

/// Request for the engine to do something.
///
/// Front ends that do their own rendering and input handling talk to the
/// evaluator with these, one JSON object per line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to start over with a fresh evaluator.
    ///
    /// The response should be an [`Okay`].
    NewGame {
        /// Side length of the board.
        size: usize,
        /// The piece the engine plays.
        piece: Piece,
    },
    /// The opponent placed a piece, which the engine has to mirror.
    ///
    /// The response should be an [`Okay`].
    OpponentMove { position: Position },
    /// Request to choose and claim the engine's next move.
    ///
    /// The response should be a [`Position`], or an [`ErrorResponse`] if the
    /// board is full.
    ChooseMove,
    /// The engine should shut down.
    Bye,
}

/// Dummy struct for use in engine communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// Sent instead of the regular response when a request could not be carried out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
