//! Play command - run a game between humans and/or engine tiers

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::{
    cli::{config::EngineArgs, output::render_board},
    search::{Difficulty, Engine},
    tictactoe::{GameState, Player, Position},
};

/// Who controls one side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Controller {
    Human,
    Easy,
    Medium,
    Hard,
}

impl Controller {
    fn difficulty(self) -> Option<Difficulty> {
        match self {
            Controller::Human => None,
            Controller::Easy => Some(Difficulty::Easy),
            Controller::Medium => Some(Difficulty::Medium),
            Controller::Hard => Some(Difficulty::Hard),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play a game of Tic-Tac-Toe")]
pub struct PlayArgs {
    /// Controller for X
    #[arg(long, value_enum, default_value = "human")]
    pub x: Controller,

    /// Controller for O
    #[arg(long, value_enum, default_value = "hard")]
    pub o: Controller,

    #[command(flatten)]
    pub engine: EngineArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut engine = Engine::new(args.engine.load()?)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut state = GameState::initial();

    while !state.is_terminal() {
        println!("{}", render_board(state.board(), &[]));
        let controller = match state.current_player() {
            Player::X => args.x,
            Player::O => args.o,
        };

        state = match controller.difficulty() {
            Some(difficulty) => {
                let mv = engine.best_move(&state, difficulty)?;
                println!("{} ({difficulty}) plays {mv}", state.current_player());
                state.apply_move(mv)?
            }
            None => prompt_move(&state, &mut input)?,
        };
    }

    let highlight = state.winning_line().map(|line| line.to_vec()).unwrap_or_default();
    println!("{}", render_board(state.board(), &highlight));
    println!("Result: {}", state.status());
    Ok(())
}

/// Read moves until one is legal
fn prompt_move(state: &GameState, input: &mut impl BufRead) -> Result<GameState> {
    loop {
        print!("{} to move (row col): ", state.current_player());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow!("input closed before the game finished"));
        }

        let Some(pos) = parse_position(&line) else {
            println!("Enter a row and column between 0 and 2, e.g. `1 1`");
            continue;
        };
        match state.apply_move(pos) {
            Ok(next) => return Ok(next),
            Err(e) => println!("{e}"),
        }
    }
}

/// Parse "r c" or "r,c"
fn parse_position(line: &str) -> Option<Position> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse::<usize>);
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, col))
}
