//! The 3×3 grid and its terminal-condition evaluator.
//!
//! [`Board`] is a *derived* projection: the match engine stores only the
//! move log and rebuilds the grid with [`Board::replay`] whenever it needs
//! one. There is deliberately no second, independently writable board
//! representation to drift out of sync with the moves.

use std::fmt;

use tactix_protocol::Symbol;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Errors from placing a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The position is outside 0–8.
    #[error("position {0} is out of range (0-8)")]
    OutOfRange(usize),

    /// The target cell already holds a symbol.
    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
}

/// The result of evaluating a board for terminal conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No win and at least one empty cell remains.
    Ongoing,
    /// Three equal symbols on one of the eight lines.
    Win(Symbol),
    /// Board full with no winning line.
    Draw,
}

/// A 3×3 grid, row-major, cells empty or holding a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Symbol>; CELLS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board by applying `moves` in order.
    ///
    /// Fails with the first placement error, so a sequence accepted move
    /// by move always replays cleanly.
    pub fn replay(
        moves: impl IntoIterator<Item = (usize, Symbol)>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (position, symbol) in moves {
            board.apply(position, symbol)?;
        }
        Ok(board)
    }

    /// Places `symbol` at `position`.
    ///
    /// # Errors
    /// - [`BoardError::OutOfRange`] if `position` is not 0–8.
    /// - [`BoardError::CellOccupied`] if the cell is non-empty.
    pub fn apply(
        &mut self,
        position: usize,
        symbol: Symbol,
    ) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(BoardError::OutOfRange(position))?;
        if cell.is_some() {
            return Err(BoardError::CellOccupied(position));
        }
        *cell = Some(symbol);
        Ok(())
    }

    /// Evaluates terminal conditions.
    ///
    /// The win check runs before the draw check: a full board containing
    /// a winning line is a [`Outcome::Win`], never a [`Outcome::Draw`].
    pub fn evaluate(&self) -> Outcome {
        for line in LINES {
            if let Some(symbol) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(symbol)
                    && self.cells[line[2]] == Some(symbol)
                {
                    return Outcome::Win(symbol);
                }
            }
        }
        if self.cells.iter().all(Option::is_some) {
            return Outcome::Draw;
        }
        Outcome::Ongoing
    }

    /// Returns the cell at `position`, or `None` when out of range.
    pub fn cell(&self, position: usize) -> Option<Option<Symbol>> {
        self.cells.get(position).copied()
    }

    /// Positions that are still empty, in ascending order.
    pub fn open_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// The 9-character wire encoding over `{' ', 'X', 'O'}`.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or(' ', Symbol::mark))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

// =========================================================================
// Tests
// =========================================================================
