use chess_core::{movegen, Board, Color, GameStatus};
use chess_engine::{ChessAI, SearchRequest, SearchWorker};
use clap::Parser;
use log::{error, info};
use tracing_subscriber::EnvFilter;

/// Plays the minimax engine against itself in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Search depth in plies (clamped to the engine's range)
    #[arg(short, long, conflicts_with = "skill")]
    depth: Option<u8>,

    /// Strength on the 0-20 scale, mapped onto a search depth
    #[arg(short, long)]
    skill: Option<u8>,

    /// Stop after this many half-moves
    #[arg(short, long, default_value_t = 20)]
    plies: u32,

    /// Starting position (FEN, only the piece placement is read)
    #[arg(long)]
    fen: Option<String>,

    /// Side to move first
    #[arg(long, default_value = "white", value_parser = parse_color)]
    first: Color,
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("unknown color {other:?}, expected white or black")),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let ai = match (args.depth, args.skill) {
        (Some(depth), _) => ChessAI::new(depth),
        (None, Some(skill)) => ChessAI::from_skill(skill),
        (None, None) => ChessAI::default(),
    };
    let mut board = match &args.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::new(),
    };
    info!("self-play at depth {} for up to {} plies", ai.depth(), args.plies);
    println!("{board}\n");

    let mut worker = SearchWorker::new(ai.config().clone())?;
    let mut side = args.first;
    for ply in 1..=args.plies {
        worker.post(SearchRequest {
            board,
            depth: i32::from(ai.depth()),
            maximizing: side == Color::White,
        });
        let reply = worker.recv().ok_or("search worker stopped replying")?;
        let result = reply.result?;

        let Some(mv) = result.best_move else {
            match result.status {
                GameStatus::Checkmate => println!("{side:?} is checkmated."),
                _ => println!("{side:?} is stalemated."),
            }
            return Ok(());
        };

        board.make_move(mv);
        println!("{ply}. {side:?} {mv} (score {}, {} nodes)", result.score, result.nodes_searched);
        println!("{board}\n");
        side = side.opposite();
    }

    match movegen::status(&board, side)? {
        GameStatus::Checkmate => println!("{side:?} is checkmated."),
        GameStatus::Stalemate => println!("{side:?} is stalemated."),
        _ => println!("Stopped after {} plies.", args.plies),
    }
    Ok(())
}
