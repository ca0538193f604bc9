//! Board state representation and basic operations

use std::{
    fmt,
    iter::FusedIterator,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// The symbol a player places on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(crate::Error::InvalidMarkString {
                input: other.to_string(),
            }),
        }
    }
}

/// Status of a position, derived purely from its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::InProgress => "in progress",
            GameResult::XWins => "X wins",
            GameResult::OWins => "O wins",
            GameResult::Draw => "draw",
        };
        f.write_str(text)
    }
}

/// Nine cells in row-major order.
///
/// The mark to move is not stored: X opens, so it is X whenever both marks
/// have been placed equally often and O otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    /// Wrap raw cells without validating piece counts.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        BoardState { cells }
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Create a board from a 9-character string such as `"X...O...X"`.
    ///
    /// Whitespace is ignored, so `"X.. .O. ..X"` is accepted as well.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts break the X-opens invariant
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let count = Self::count_pieces(&cells);
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(BoardState { cells })
    }

    /// The mark whose turn it is
    pub fn to_move(&self) -> Mark {
        let count = Self::count_pieces(&self.cells);
        if count.x > count.o { Mark::O } else { Mark::X }
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Lazily iterate over empty positions in ascending order.
    ///
    /// Each call starts a fresh pass over the current cells.
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells {
            cells: &self.cells,
            next: 0,
        }
    }

    /// True iff no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if a mark has won
    pub fn has_won(&self, mark: Mark) -> bool {
        LineAnalyzer::has_won(&self.cells, mark)
    }

    /// Derive the game status from the cells
    pub fn status(&self) -> GameResult {
        match self.winner() {
            Some(Mark::X) => GameResult::XWins,
            Some(Mark::O) => GameResult::OWins,
            None if self.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Place the mark to move at `pos` and return the new board.
    #[must_use = "apply_move returns a new board state; the original is unchanged"]
    pub fn apply_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if self.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move().to_cell();
        Ok(new_state)
    }

    /// Tentatively place `mark` at an empty `pos`.
    ///
    /// The cell is cleared again when the returned guard is dropped, so nested
    /// searches can place and recurse without restoring cells by hand.
    pub fn trial(&mut self, pos: usize, mark: Mark) -> TrialMove<'_> {
        debug_assert!(self.is_empty(pos), "trial move on occupied cell {pos}");
        self.cells[pos] = mark.to_cell();
        TrialMove { board: self, pos }
    }

    /// Nine-character encoding, the inverse of [`BoardState::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the empty positions of a board, see [`BoardState::empty_cells`]
#[derive(Debug, Clone)]
pub struct EmptyCells<'a> {
    cells: &'a [Cell; 9],
    next: usize,
}

impl Iterator for EmptyCells<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < 9 {
            let pos = self.next;
            self.next += 1;
            if self.cells[pos] == Cell::Empty {
                return Some(pos);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(9 - self.next))
    }
}

impl FusedIterator for EmptyCells<'_> {}

/// A mark placed for the duration of a search step, see [`BoardState::trial`]
#[derive(Debug)]
pub struct TrialMove<'a> {
    board: &'a mut BoardState,
    pos: usize,
}

impl Deref for TrialMove<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut BoardState {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.pos] = Cell::Empty;
    }
}
