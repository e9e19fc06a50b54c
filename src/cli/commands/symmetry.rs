//! Symmetry command - show a board's D4 orbit and canonical form

use anyhow::Result;
use clap::Parser;

use super::parse_state;
use crate::{cli::output::print_section, tictactoe::D4Transform};

#[derive(Parser, Debug)]
#[command(about = "Show the symmetry orbit and canonical key of a board")]
pub struct SymmetryArgs {
    /// Board to analyze (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,
}

pub fn execute(args: SymmetryArgs) -> Result<()> {
    let state = parse_state(args.board.as_deref())?;
    let board = state.board();
    let form = board.canonical_form();

    print_section("Symmetry Analysis");
    println!("Original ({}):", board.serialize());
    println!("{board}");
    println!("\nCanonical ({}):", form.key);
    println!("{}", form.board);

    println!("\nOrbit:");
    for (i, (transform, sym)) in D4Transform::all()
        .iter()
        .zip(board.symmetries())
        .enumerate()
    {
        let marker = if sym.serialize() == form.key {
            " (canonical)"
        } else {
            ""
        };
        println!(
            "{}. rotation {}°, {}{marker}",
            i + 1,
            transform.rotation,
            if transform.reflection {
                "reflected"
            } else {
                "no reflection"
            }
        );
        println!("{sym}\n");
    }

    Ok(())
}
