//! Tic-tac-toe minimax binary.
//!
//! Usage:
//!   cargo run --release --bin tictactoe -- [OPTIONS]
//!
//! Examples:
//!   tictactoe                                  # best opening move
//!   tictactoe --board "XX./OO./..."            # best reply in a position
//!   tictactoe --ordering shuffled --seed 7 --play

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use solver_poc_ai::games::tictactoe::Board;
use solver_poc_ai::search::{MoveOrdering, SearchConfig, Solver};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Perfect-play tic-tac-toe solver", long_about = None)]
struct Cli {
    /// Starting position as nine cells (X, O, '.'), '/' separates rows
    #[arg(short, long, default_value = ".../.../...")]
    board: Board,

    /// Move ordering: sequential or shuffled
    #[arg(short, long, default_value = "sequential")]
    ordering: MoveOrdering,

    /// Random seed for shuffled ordering
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play the game out from the position instead of a single search
    #[arg(short, long)]
    play: bool,
}

fn describe(utility: i32) -> &'static str {
    match utility {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SearchConfig::new().with_ordering(cli.ordering);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut solver = Solver::new(config);

    println!("{}\n", cli.board);

    let start = Instant::now();

    if cli.play {
        let game = solver.play_out(&cli.board).context("self-play failed")?;

        let mut board = cli.board;
        for mv in &game.moves {
            let player = board.current_player();
            board = board.apply_move(*mv)?;
            println!("{} plays {}\n{}\n", player, mv, board);
        }

        println!("Result: {}", describe(game.final_board.utility()));
        println!(
            "Nodes: {}  Cutoffs: {}  Time: {:.3}s",
            game.stats.nodes,
            game.stats.cutoffs,
            start.elapsed().as_secs_f64()
        );
        return Ok(());
    }

    let result = solver.search(&cli.board);
    match result.best_move {
        Some(mv) => println!("{} to move, best move: {}", cli.board.current_player(), mv),
        None => println!("Game over"),
    }
    println!("Value: {} ({})", result.utility, describe(result.utility));
    println!(
        "Nodes: {}  Cutoffs: {}  Time: {:.3}s",
        result.stats.nodes,
        result.stats.cutoffs,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
