//! Output formatting for CLI

use crate::tictactoe::{BoardState, Cell};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a count with its share of `total` as a percentage
pub fn format_share(count: usize, total: usize) -> String {
    if total == 0 {
        return format!("{count}");
    }
    format!("{count} ({:.1}%)", count as f64 * 100.0 / total as f64)
}

/// Render a board for a human player, numbering the empty cells
///
/// ```text
///  X | 1 | 2
/// ---+---+---
///  3 | O | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
pub fn render_board(board: &BoardState) -> String {
    let rows: Vec<String> = board
        .cells
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => format!(" {} ", row * 3 + col),
                    _ => format!(" {} ", cell.to_char()),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}
