//! Strategy command - extract the precomputed move table

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::parse_state;
use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    search::calculate_optimal_strategy,
};

#[derive(Parser, Debug)]
#[command(about = "Extract the strategy table from the full game tree")]
pub struct StrategyArgs {
    /// Write the table as JSON
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,

    /// Look up the recommended move for this board
    #[arg(long)]
    pub board: Option<String>,
}

pub fn execute(args: StrategyArgs) -> Result<()> {
    let spinner = create_spinner("Extracting strategy...");
    let table = calculate_optimal_strategy();
    spinner.finish_and_clear();

    print_section("Strategy Table");
    print_kv("entries", &format_number(table.len()));

    if let Some(board) = args.board.as_deref() {
        let state = parse_state(Some(board))?;
        match table.lookup(&state) {
            Some(mv) => print_kv("recommended", &mv.to_string()),
            None => print_kv("recommended", "(no entry)"),
        }
    }

    if let Some(path) = args.export {
        table.write_json(&path)?;
        println!("\nStrategy table exported to: {}", path.display());
    }

    Ok(())
}
