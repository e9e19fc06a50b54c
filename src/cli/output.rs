//! Output formatting and progress spinners for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Position};

/// Create a spinner for long-running searches
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Describe a minimax value from X's point of view
pub fn describe_value(value: i32) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

/// Render a board with row/column labels; highlighted cells are lowercased
pub fn render_board(board: &Board, highlight: &[Position]) -> String {
    let mut out = String::from("    0 1 2\n");
    for row in 0..3 {
        out.push_str(&format!("  {row} "));
        for col in 0..3 {
            let pos = Position::new(row, col);
            let symbol = board.get(pos).map(|c| c.to_char()).unwrap_or('?');
            if highlight.contains(&pos) {
                out.push(symbol.to_ascii_lowercase());
            } else {
                out.push(symbol);
            }
            if col < 2 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}
