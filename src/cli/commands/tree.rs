//! Tree command - build the exhaustive search tree and report its shape

use anyhow::Result;
use clap::Parser;

use super::parse_state;
use crate::{
    cli::output::{create_spinner, describe_value, format_number, print_kv, print_section},
    search::build_game_tree_from,
};

#[derive(Parser, Debug)]
#[command(about = "Build the full alpha-beta tree and print statistics")]
pub struct TreeArgs {
    /// Root board (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let root = parse_state(args.board.as_deref())?;

    let spinner = create_spinner("Building game tree...");
    let tree = build_game_tree_from(&root);
    spinner.finish_and_clear();

    let stats = tree.stats();
    print_section("Game Tree");
    println!("{}", root.board());
    print_kv("root value", describe_value(tree.root_value()));
    print_kv("nodes", &format_number(tree.node_count()));
    print_kv("leaves", &format_number(tree.leaf_count()));
    print_kv("max depth", &tree.max_depth().to_string());
    print_kv("cutoffs", &format_number(stats.cutoffs));
    print_kv("table hits", &format_number(stats.table_hits));
    print_kv("table entries", &format_number(stats.table_entries));

    Ok(())
}
