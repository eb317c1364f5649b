use std::io::{self, Write};

use clap::Parser;
use gomoku::{check_board_size, Piece, BOARD_SIZE};
use gomoku_cli::{play_game, serve, ComputerPlayer, GameResult, HumanPlayer, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Side length of the board
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// The color you play, "black" or "white". Black moves first
    #[arg(long, default_value = "black")]
    human: Piece,

    /// Let the computer play this many games against itself instead of playing interactively
    #[arg(long, conflicts_with = "engine")]
    self_play: Option<usize>,

    /// Serve the engine as JSON lines on stdin/stdout, for use by another front end
    #[arg(long, default_value_t = false)]
    engine: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    // Indexed by black = 0, white = 1
    wins: [usize; 2],
    draws: usize,
}

impl MatchScore {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Won { piece } => self.wins[piece_idx(piece)] += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::Abandoned => {}
        }
    }
}

fn piece_idx(piece: Piece) -> usize {
    match piece {
        Piece::Black => 0,
        Piece::White => 1,
    }
}

fn play_interactive(board_size: usize, human_piece: Piece, rng: &mut StdRng) -> anyhow::Result<()> {
    let mut human = HumanPlayer::new("Player", human_piece, io::stdin().lock(), io::stdout());
    let mut score = MatchScore::default();

    loop {
        // Every game gets a fresh evaluator, just like it gets a fresh board.
        let mut computer = ComputerPlayer::new("AI", board_size, human_piece.opponent(), rng);
        let players: [&mut dyn Player; 2] = match human_piece {
            Piece::Black => [&mut human as &mut dyn Player, &mut computer],
            Piece::White => [&mut computer as &mut dyn Player, &mut human],
        };
        let (result, board) = play_game(board_size, players)?;
        if result == GameResult::Abandoned {
            break;
        }
        score.record(result);

        let message = match result {
            GameResult::Won { piece } if piece == human_piece => format!("{} won!", human.name),
            GameResult::Won { .. } => format!("{} won!", computer.name),
            _ => String::from("Draw, the board is full"),
        };
        writeln!(human.output(), "{}\n{}", board.grid(), message)?;
        writeln!(
            human.output(),
            "Score: {} {} victories, {} {} victories, {} draws",
            Piece::Black,
            score.wins[0],
            Piece::White,
            score.wins[1],
            score.draws
        )?;

        match human.prompt("Press Enter to start a new game or q to quit: ")? {
            Some(answer) if !matches!(answer.as_str(), "q" | "quit") => {}
            _ => break,
        }
    }
    Ok(())
}

fn play_self_matchup(
    board_size: usize,
    num_games: usize,
    rng: &mut StdRng,
) -> anyhow::Result<MatchScore> {
    let mut score = MatchScore::default();

    for game_idx in 0..num_games {
        let mut black = ComputerPlayer::new("AI 1", board_size, Piece::Black, rng);
        let mut white = ComputerPlayer::new("AI 2", board_size, Piece::White, rng);
        let (result, _) = play_game(board_size, [&mut black, &mut white])?;
        match result {
            GameResult::Won { piece } => debug!(winner = %piece, game_idx),
            GameResult::Draw => debug!(game_idx, "Draw"),
            GameResult::Abandoned => anyhow::bail!("A computer player quit in game {}", game_idx),
        }
        score.record(result);
    }

    eprintln!(
        "End result:\n- {} wins by {}\n- {} wins by {}\n- {} draws",
        score.wins[0],
        Piece::Black,
        score.wins[1],
        Piece::White,
        score.draws
    );

    Ok(score)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    check_board_size(args.size)?;

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    if args.engine {
        serve(io::stdin().lock(), io::stdout().lock(), &mut rng)
    } else if let Some(num_games) = args.self_play {
        play_self_matchup(args.size, num_games, &mut rng).map(|_| ())
    } else {
        play_interactive(args.size, args.human, &mut rng)
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
