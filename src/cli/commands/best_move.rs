//! Best-move command - recommend a move for a position

use anyhow::Result;
use clap::Parser;

use super::parse_state;
use crate::{
    cli::{
        config::EngineArgs,
        output::{describe_value, print_kv, render_board},
    },
    search::{Difficulty, Engine, policy::score_moves},
};

#[derive(Parser, Debug)]
#[command(about = "Recommend a move for a board position")]
pub struct BestMoveArgs {
    /// Board as nine cells, e.g. "X../.O./..." (side to move is inferred)
    #[arg(long)]
    pub board: Option<String>,

    /// Playing strength
    #[arg(long, short = 'd', value_enum, default_value_t = Difficulty::Hard)]
    pub difficulty: Difficulty,

    /// Also print the searched value of every legal move
    #[arg(long)]
    pub scores: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let state = parse_state(args.board.as_deref())?;
    let config = args.engine.load()?;

    println!("{}", render_board(state.board(), &[]));
    print_kv("to move", &state.current_player().to_string());
    print_kv("status", &state.status().to_string());

    let mut engine = Engine::new(config.clone())?;
    let mv = engine.best_move(&state, args.difficulty)?;
    print_kv("difficulty", &args.difficulty.to_string());
    print_kv("best move", &mv.to_string());

    if args.scores {
        let budget = match args.difficulty {
            Difficulty::Medium => config.medium_depth,
            Difficulty::Easy | Difficulty::Hard => config.hard_depth,
        };
        println!("\nMove values (remaining depth {budget}):");
        for (candidate, value) in score_moves(&state, budget)? {
            println!("  {candidate}: {}", describe_value(value));
        }
    }

    Ok(())
}
