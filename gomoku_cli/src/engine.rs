use std::io::{BufRead, Write};

use gomoku::{check_board_size, Cell, ErrorResponse, Evaluator, Okay, Request};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, trace};

/// Serves the evaluator to a front end that does its own rendering and input handling.
///
/// Communication happens through one JSON [`Request`] per line on `input` and one JSON
/// response per line on `output`. Returns when the input ends or on [`Request::Bye`],
/// and with an error on I/O failure or malformed requests.
pub fn serve<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    let mut evaluator: Option<Evaluator> = None;
    let mut buf = String::new();

    loop {
        buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = input.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF - the front end has exited.
            break Ok(());
        }
        if buf.trim().is_empty() {
            continue;
        }

        let req = serde_json::from_str::<Request>(buf.trim_end())?;
        trace!(name: "Received request", request = ?req);

        match req {
            Request::NewGame { size, piece } => match check_board_size(size) {
                Ok(_) => {
                    debug!(size, %piece, "New game");
                    evaluator = Some(Evaluator::new(
                        size,
                        piece,
                        StdRng::seed_from_u64(rng.gen()),
                    ));
                    respond(&mut output, &Okay())?;
                }
                Err(err) => respond(
                    &mut output,
                    &ErrorResponse {
                        error: err.to_string(),
                    },
                )?,
            },
            Request::OpponentMove { position } => match evaluator.as_mut() {
                Some(ev) if ev.grid().get(position) == Some(Cell::Empty) => {
                    ev.record_opponent_move(position);
                    respond(&mut output, &Okay())?;
                }
                Some(_) => respond(
                    &mut output,
                    &ErrorResponse {
                        error: format!("{} is not an empty position on the board", position),
                    },
                )?,
                None => respond(&mut output, &no_game())?,
            },
            Request::ChooseMove => match evaluator.as_mut().map(|ev| ev.choose_move()) {
                Some(Ok(pos)) => respond(&mut output, &pos)?,
                Some(Err(err)) => respond(
                    &mut output,
                    &ErrorResponse {
                        error: err.to_string(),
                    },
                )?,
                None => respond(&mut output, &no_game())?,
            },
            Request::Bye => break Ok(()),
        }
    }
}

fn no_game() -> ErrorResponse {
    ErrorResponse {
        error: String::from("No game in progress, send a NewGame request first"),
    }
}

fn respond<W: Write, T: Serialize>(output: &mut W, response: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *output, response)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use gomoku::Position;

    use super::*;

    fn run(requests: &[&str]) -> anyhow::Result<Vec<String>> {
        let input = Cursor::new(requests.join("\n").into_bytes());
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        serve(input, &mut output, &mut rng)?;
        Ok(String::from_utf8(output)?
            .lines()
            .map(String::from)
            .collect())
    }

    #[test]
    fn plays_a_move() {
        let responses = run(&[
            r#"{"type":"NewGame","size":5,"piece":"white"}"#,
            r#"{"type":"OpponentMove","position":{"x":2,"y":2}}"#,
            r#"{"type":"ChooseMove"}"#,
            r#"{"type":"Bye"}"#,
            r#"{"type":"ChooseMove"}"#,
        ])
        .unwrap();
        assert_eq!(responses.len(), 3);
        assert!(serde_json::from_str::<Okay>(&responses[0]).is_ok());
        assert!(serde_json::from_str::<Okay>(&responses[1]).is_ok());
        let pos: Position = serde_json::from_str(&responses[2]).unwrap();
        assert_ne!(pos, Position::new(2, 2));
        assert!((0..5).contains(&pos.x) && (0..5).contains(&pos.y));
    }

    #[test]
    fn reports_errors() {
        let responses = run(&[
            r#"{"type":"ChooseMove"}"#,
            r#"{"type":"NewGame","size":1,"piece":"black"}"#,
            r#"{"type":"OpponentMove","position":{"x":1,"y":0}}"#,
            r#"{"type":"ChooseMove"}"#,
            r#"{"type":"ChooseMove"}"#,
        ])
        .unwrap();
        assert_eq!(responses.len(), 5);
        assert!(responses[0].contains("No game in progress"));
        assert!(serde_json::from_str::<Okay>(&responses[1]).is_ok());
        assert!(responses[2].contains("not an empty position"));
        assert_eq!(responses[3], r#"{"x":0,"y":0}"#);
        assert!(responses[4].contains("No legal move"));
    }

    #[test]
    fn rejects_unsupported_board_sizes() {
        let responses = run(&[
            r#"{"type":"NewGame","size":0,"piece":"white"}"#,
            r#"{"type":"NewGame","size":4294967296,"piece":"white"}"#,
            r#"{"type":"NewGame","size":101,"piece":"black"}"#,
            r#"{"type":"ChooseMove"}"#,
            r#"{"type":"NewGame","size":100,"piece":"black"}"#,
        ])
        .unwrap();
        assert_eq!(responses.len(), 5);
        for response in &responses[..3] {
            assert!(response.contains("is not supported"), "{}", response);
        }
        assert!(responses[3].contains("No game in progress"));
        assert!(serde_json::from_str::<Okay>(&responses[4]).is_ok());
    }

    #[test]
    fn malformed_request_is_fatal() {
        assert!(run(&["{\"type\":\"Resign\"}"]).is_err());
    }
}
