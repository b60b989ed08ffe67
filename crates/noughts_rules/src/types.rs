//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Marker a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Marker X (seat one, moves first).
    X,
    /// Marker O (seat two).
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Display symbol for this marker.
    pub fn symbol(self) -> &'static str {
        match self {
            Marker::X => "X",
            Marker::O => "O",
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// Error raised by board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Index is not in 0..=8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for BoardError {}

/// Indices on the board holding one marker.
///
/// Stored as a 9-bit mask; iteration yields indices in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet(u16);

impl PositionSet {
    /// Returns true if `index` is in the set.
    pub fn contains(self, index: usize) -> bool {
        index < CELL_COUNT && self.0 & (1 << index) != 0
    }

    /// Number of indices in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no index is in the set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..CELL_COUNT).filter(move |&i| self.contains(i))
    }

    fn insert(&mut self, index: usize) {
        self.0 |= 1 << index;
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places a marker at `index`.
    ///
    /// An occupied cell is overwritten; callers check emptiness first.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, marker: Marker) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds(index))?;
        *cell = Cell::Occupied(marker);
        Ok(())
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Indices currently holding `marker`.
    pub fn positions_of(&self, marker: Marker) -> PositionSet {
        let mut set = PositionSet::default();
        for (i, cell) in self.cells.iter().enumerate() {
            if *cell == Cell::Occupied(marker) {
                set.insert(i);
            }
        }
        set
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.positions_of(marker).len()
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => result.push_str(&(pos + 1).to_string()),
                    Cell::Occupied(marker) => result.push_str(marker.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELL_COUNT).all(|i| board.is_empty(i)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(4, Marker::O).unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Marker::O)));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Marker::X), Err(BoardError::OutOfBounds(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_positions_of() {
        let mut board = Board::new();
        board.place(0, Marker::X).unwrap();
        board.place(8, Marker::X).unwrap();
        board.place(4, Marker::O).unwrap();

        let xs = board.positions_of(Marker::X);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs.iter().collect::<Vec<_>>(), vec![0, 8]);
        assert!(!xs.contains(4));
        assert!(board.positions_of(Marker::O).contains(4));
    }

    #[test]
    fn test_full_and_reset() {
        let mut board = Board::new();
        for i in 0..CELL_COUNT {
            board.place(i, if i % 2 == 0 { Marker::X } else { Marker::O }).unwrap();
        }
        assert!(board.is_full());

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, Marker::X).unwrap();
        board.place(4, Marker::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
