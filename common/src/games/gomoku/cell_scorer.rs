use super::board::{Board, DIRECTIONS};
use super::line_scanner::scan_line;
use super::types::{Position, Symbol};

/// Longest run `symbol` would form through `pos`. Always at least 1.
pub fn score_cell(board: &Board, pos: Position, symbol: Symbol) -> usize {
    DIRECTIONS
        .iter()
        .map(|&direction| scan_line(board, pos, symbol, direction))
        .max()
        .unwrap_or(1)
}
