//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board, in canonical scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark occupying the first complete line in canonical order, if any.
    pub fn winner(cells: &[Cell; 9]) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let mark = cells[a].to_mark()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some(mark)
        })
    }

    /// Check if a mark has three in a row
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First cell (in canonical line order) that completes a line for `mark`.
    pub fn immediate_move(cells: &[Cell; 9], mark: Mark) -> Option<usize> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::winning_move_in_line(cells, mark, line))
    }

    /// All cells that would immediately complete a line for `mark`, ascending.
    pub fn winning_moves(cells: &[Cell; 9], mark: Mark) -> BTreeSet<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, mark, line))
            .collect()
    }

    /// Find the completing cell in a specific line: two of `mark` plus one empty.
    fn winning_move_in_line(cells: &[Cell; 9], mark: Mark, line: &[usize; 3]) -> Option<usize> {
        let target = mark.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
