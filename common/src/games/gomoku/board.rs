use std::fmt;

use super::types::{Mark, Position, Symbol};

pub const BOARD_SIZE: usize = 14;

/// Horizontal, vertical and the two diagonals as `(d_row, d_col)`. Each
/// direction stands for a whole line; scans walk both signed steps.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

pub fn in_bounds(row: isize, col: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    WrongRowCount(usize),
    WrongColumnCount { row: usize, len: usize },
    InvalidCell { row: usize, col: usize, value: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongRowCount(count) => {
                write!(f, "board must have {} rows, got {}", BOARD_SIZE, count)
            }
            BoardError::WrongColumnCount { row, len } => write!(
                f,
                "row {} must have {} cells, got {}",
                row, BOARD_SIZE, len
            ),
            BoardError::InvalidCell { row, col, value } => write!(
                f,
                "cell ({}, {}) must be '', 'X' or 'O', got '{}'",
                row, col, value
            ),
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the wire representation: rows of `""`, `"X"` or `"O"`.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != BOARD_SIZE {
                return Err(BoardError::WrongColumnCount {
                    row,
                    len: values.len(),
                });
            }
            for (col, value) in values.iter().enumerate() {
                let value = value.as_ref();
                board.cells[row][col] = match value.trim() {
                    "" => Mark::Empty,
                    other => Symbol::parse(other)
                        .map(Mark::from)
                        .map_err(|_| BoardError::InvalidCell {
                            row,
                            col,
                            value: value.to_string(),
                        })?,
                };
            }
        }
        Ok(board)
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|mark| mark.as_str().to_string()).collect())
            .collect()
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    /// Returns the board rotated by 180 degrees.
    pub fn rotated(&self) -> Self {
        let mut rotated = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                rotated.cells[BOARD_SIZE - 1 - row][BOARD_SIZE - 1 - col] = self.cells[row][col];
            }
        }
        rotated
    }

    /// Returns the board with X and O swapped.
    pub fn relabeled(&self) -> Self {
        let mut relabeled = self.clone();
        for mark in relabeled.cells.iter_mut().flat_map(|row| row.iter_mut()) {
            *mark = match mark.symbol() {
                Some(symbol) => Mark::from(symbol.opponent()),
                None => Mark::Empty,
            };
        }
        relabeled
    }
}

/// Empty cells in row-major order. Move selection relies on this order.
pub fn available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            if board.get(pos) == Mark::Empty {
                moves.push(pos);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_rows() -> Vec<Vec<String>> {
        vec![vec![String::new(); BOARD_SIZE]; BOARD_SIZE]
    }

    #[test]
    fn test_in_bounds_edges() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(13, 13));
        assert!(!in_bounds(-1, 0));
        assert!(!in_bounds(0, 14));
        assert!(!in_bounds(14, 5));
    }

    #[test]
    fn test_from_rows_parses_marks() {
        let mut rows = empty_rows();
        rows[2][3] = "X".to_string();
        rows[4][5] = "o".to_string();

        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.get(Position::new(2, 3)), Mark::X);
        assert_eq!(board.get(Position::new(4, 5)), Mark::O);
        assert_eq!(board.count(Mark::Empty), BOARD_SIZE * BOARD_SIZE - 2);
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_count() {
        let rows = vec![vec![String::new(); BOARD_SIZE]; BOARD_SIZE - 1];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::WrongRowCount(BOARD_SIZE - 1))
        );
    }

    #[test]
    fn test_from_rows_rejects_short_row() {
        let mut rows = empty_rows();
        rows[7].pop();
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::WrongColumnCount { row: 7, len: BOARD_SIZE - 1 })
        );
    }

    #[test]
    fn test_from_rows_rejects_unknown_cell() {
        let mut rows = empty_rows();
        rows[1][9] = "Z".to_string();
        assert!(matches!(
            Board::from_rows(&rows),
            Err(BoardError::InvalidCell { row: 1, col: 9, .. })
        ));
    }

    #[test]
    fn test_available_moves_row_major() {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), Mark::X);
        board.set(Position::new(0, 2), Mark::O);

        let moves = available_moves(&board);
        assert_eq!(moves.len(), BOARD_SIZE * BOARD_SIZE - 2);
        assert_eq!(moves[0], Position::new(0, 1));
        assert_eq!(moves[1], Position::new(0, 3));
        assert_eq!(moves.last(), Some(&Position::new(13, 13)));
    }

    #[test]
    fn test_to_rows_preserves_board() {
        let mut board = Board::empty();
        board.set(Position::new(6, 6), Mark::O);
        let restored = Board::from_rows(&board.to_rows()).unwrap();
        assert_eq!(restored, board);
    }
}
